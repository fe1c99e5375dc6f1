//! Loading sibling descriptors from a located source

use super::{get_parser, read_descriptor_file, DescriptorFormat};
use crate::domain::{ProjectDescriptor, SiblingLocation};
use crate::error::{AppError, DescriptorError};
use crate::remote::RemoteSource;
use url::Url;

/// Loads descriptors with the same format and file name as the root project
pub struct DescriptorLoader<'a> {
    remote: &'a dyn RemoteSource,
    file_name: &'a str,
    format: DescriptorFormat,
}

impl<'a> DescriptorLoader<'a> {
    /// Create a loader for descriptors named `file_name`
    pub fn new(remote: &'a dyn RemoteSource, file_name: &'a str, format: DescriptorFormat) -> Self {
        Self {
            remote,
            file_name,
            format,
        }
    }

    /// URL of the descriptor document inside a remote sibling repository
    pub fn document_url(&self, repository: &Url) -> Result<Url, DescriptorError> {
        let mut url = repository.clone();
        url.path_segments_mut()
            .map_err(|_| {
                DescriptorError::parse_error(repository.as_str(), "URL cannot hold a path")
            })?
            .pop_if_empty()
            .push(self.file_name);
        Ok(url)
    }

    /// Load the descriptor a locator result points at
    pub async fn load(&self, location: &SiblingLocation) -> Result<ProjectDescriptor, AppError> {
        match location {
            SiblingLocation::Local(path) => Ok(read_descriptor_file(path)?),
            SiblingLocation::Remote(repository) => {
                let url = self.document_url(repository)?;
                let bytes = self.remote.fetch(&url).await?;
                let content = String::from_utf8(bytes).map_err(|e| {
                    DescriptorError::parse_error(url.as_str(), format!("invalid UTF-8: {}", e))
                })?;
                Ok(get_parser(self.format).parse(&content, url.as_str())?)
            }
        }
    }
}
