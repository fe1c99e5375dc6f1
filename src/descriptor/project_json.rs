//! project.json parser

use super::document::DescriptorDocument;
use super::{DescriptorFormat, DescriptorParser};
use crate::domain::ProjectDescriptor;
use crate::error::DescriptorError;

/// Parser for JSON project descriptors
pub struct ProjectJsonParser;

impl DescriptorParser for ProjectJsonParser {
    fn parse(&self, content: &str, origin: &str) -> Result<ProjectDescriptor, DescriptorError> {
        let document: DescriptorDocument = serde_json::from_str(content)
            .map_err(|e| DescriptorError::parse_error(origin, e.to_string()))?;
        Ok(document.into())
    }

    fn format(&self) -> DescriptorFormat {
        DescriptorFormat::Json
    }
}
