//! Sibling project location
//!
//! A sibling is looked up next to the root project on disk first; only when
//! no local checkout exists is its repository location derived from the
//! root's version-control URL and probed over the network.

mod layout;

pub use layout::{AdjacentLayout, SiblingLayout};

use crate::domain::{SiblingLocation, VersionControlRef};
use crate::error::{AppError, NetworkError, ResolveError};
use crate::remote::RemoteSource;
use std::path::{Path, PathBuf};

/// Locates sibling projects of one root project
pub struct SiblingLocator<'a> {
    remote: &'a dyn RemoteSource,
    layout: &'a dyn SiblingLayout,
    descriptor_name: &'a str,
}

impl<'a> SiblingLocator<'a> {
    /// Create a locator looking for descriptors named `descriptor_name`
    pub fn new(
        remote: &'a dyn RemoteSource,
        layout: &'a dyn SiblingLayout,
        descriptor_name: &'a str,
    ) -> Self {
        Self {
            remote,
            layout,
            descriptor_name,
        }
    }

    /// Candidate descriptor path of a local sibling checkout
    pub fn local_candidate(&self, project: &str, root_dir: &Path) -> Option<PathBuf> {
        root_dir
            .parent()
            .map(|parent| parent.join(project).join(self.descriptor_name))
    }

    /// Locate `project` relative to the root directory and repository
    pub async fn locate(
        &self,
        project: &str,
        root_dir: &Path,
        root_vcs: &VersionControlRef,
    ) -> Result<SiblingLocation, AppError> {
        if let Some(path) = self.local_candidate(project, root_dir) {
            if path.is_file() {
                return Ok(SiblingLocation::Local(path));
            }
        }

        let candidate = self
            .layout
            .derive_sibling_location(&root_vcs.url, project)
            .ok_or_else(|| {
                ResolveError::sibling_not_found(
                    project,
                    root_vcs.url.as_str(),
                    "cannot derive a sibling location from the root repository URL",
                )
            })?;

        match self.remote.exists(&candidate).await {
            Ok(true) => Ok(SiblingLocation::Remote(candidate)),
            Ok(false) => Err(ResolveError::sibling_not_found(
                project,
                candidate.as_str(),
                "remote probe returned a non-success status",
            )
            .into()),
            Err(err @ NetworkError::Timeout { .. }) => Err(err.into()),
            Err(err) => Err(
                ResolveError::sibling_not_found(project, candidate.as_str(), err.to_string())
                    .into(),
            ),
        }
    }
}
