//! project.toml parser

use super::document::DescriptorDocument;
use super::{DescriptorFormat, DescriptorParser};
use crate::domain::ProjectDescriptor;
use crate::error::DescriptorError;

/// Parser for TOML project descriptors
pub struct ProjectTomlParser;

impl DescriptorParser for ProjectTomlParser {
    fn parse(&self, content: &str, origin: &str) -> Result<ProjectDescriptor, DescriptorError> {
        let document: DescriptorDocument = toml::from_str(content)
            .map_err(|e| DescriptorError::parse_error(origin, e.to_string()))?;
        Ok(document.into())
    }

    fn format(&self) -> DescriptorFormat {
        DescriptorFormat::Toml
    }
}
