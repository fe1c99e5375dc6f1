//! Project descriptor parsing and loading
//!
//! This module provides functionality to:
//! - Pick a descriptor format from a file name
//! - Parse TOML and JSON descriptors into `ProjectDescriptor`
//! - Load sibling descriptors from disk or over the network

mod document;
mod loader;
mod project_json;
mod project_toml;

pub use loader::DescriptorLoader;
pub use project_json::ProjectJsonParser;
pub use project_toml::ProjectTomlParser;

use crate::domain::ProjectDescriptor;
use crate::error::DescriptorError;
use std::fmt;
use std::path::Path;

/// Default descriptor file name
pub const DEFAULT_DESCRIPTOR_NAME: &str = "project.toml";

/// Supported descriptor document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorFormat {
    /// project.toml
    Toml,
    /// project.json
    Json,
}

impl DescriptorFormat {
    /// Returns the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            DescriptorFormat::Toml => "toml",
            DescriptorFormat::Json => "json",
        }
    }

    /// Detects the format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::all()
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }

    /// Returns all supported formats
    pub fn all() -> &'static [DescriptorFormat] {
        &[DescriptorFormat::Toml, DescriptorFormat::Json]
    }
}

impl fmt::Display for DescriptorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Trait for parsing descriptor documents
pub trait DescriptorParser: Send + Sync {
    /// Parse a document; `origin` names the source in error messages
    fn parse(&self, content: &str, origin: &str) -> Result<ProjectDescriptor, DescriptorError>;

    /// Returns the format this parser handles
    fn format(&self) -> DescriptorFormat;
}

/// Get a descriptor parser for the specified format
pub fn get_parser(format: DescriptorFormat) -> Box<dyn DescriptorParser> {
    match format {
        DescriptorFormat::Toml => Box::new(ProjectTomlParser),
        DescriptorFormat::Json => Box::new(ProjectJsonParser),
    }
}

/// Read and parse a descriptor file, recording its path
pub fn read_descriptor_file(path: &Path) -> Result<ProjectDescriptor, DescriptorError> {
    let format =
        DescriptorFormat::from_path(path).ok_or_else(|| DescriptorError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

    let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::read(path, e))?;

    let descriptor = get_parser(format).parse(&content, &path.display().to_string())?;
    Ok(descriptor.with_file(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DescriptorFormat::from_path(Path::new("/a/project.toml")),
            Some(DescriptorFormat::Toml)
        );
        assert_eq!(
            DescriptorFormat::from_path(Path::new("module.JSON")),
            Some(DescriptorFormat::Json)
        );
        assert_eq!(DescriptorFormat::from_path(Path::new("pom.xml")), None);
        assert_eq!(DescriptorFormat::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_get_parser() {
        assert_eq!(get_parser(DescriptorFormat::Toml).format(), DescriptorFormat::Toml);
        assert_eq!(get_parser(DescriptorFormat::Json).format(), DescriptorFormat::Json);
    }

    #[test]
    fn test_read_descriptor_file_records_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.toml");
        fs::write(
            &path,
            "[project]\ngroup = \"g\"\nartifact = \"a\"\nversion = \"1\"\n",
        )
        .unwrap();

        let descriptor = read_descriptor_file(&path).unwrap();
        assert_eq!(descriptor.file(), Some(path.as_path()));
    }

    #[test]
    fn test_read_descriptor_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = read_descriptor_file(&dir.path().join("project.toml")).unwrap_err();
        assert!(matches!(err, DescriptorError::FileVanished { .. }));
    }

    #[test]
    fn test_read_descriptor_file_unsupported() {
        let err = read_descriptor_file(Path::new("/work/app/pom.xml")).unwrap_err();
        assert!(matches!(err, DescriptorError::UnsupportedFormat { .. }));
    }
}
