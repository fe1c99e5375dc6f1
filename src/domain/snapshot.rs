//! Snapshot marker extraction

use super::{DeclaredDependency, ProjectDescriptor};
use crate::error::ResolveError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path};

/// Marker identifying in-development versions
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Suffix stripped from property keys to obtain the project name
pub const VERSION_SUFFIX: &str = "-version";

/// Returns true if the version is an in-development snapshot
pub fn is_snapshot(version: &str) -> bool {
    version.contains(SNAPSHOT_MARKER)
}

/// A sibling project pinned to a snapshot version through a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    /// Property key the entry came from (e.g. `lib-version`)
    pub property: String,
    /// Project name derived from the key (e.g. `lib`)
    pub name: String,
    /// Declared version (the raw property value)
    pub version: String,
}

impl SnapshotEntry {
    /// Builds an entry from a snapshot property
    ///
    /// The name is the key truncated at the first `-version`.
    pub fn from_property(key: &str, value: &str) -> Result<Self, ResolveError> {
        let malformed = || ResolveError::MalformedPropertyKey {
            key: key.to_string(),
        };

        let end = key.find(VERSION_SUFFIX).ok_or_else(malformed)?;
        let name = &key[..end];
        if !is_single_path_segment(name) {
            return Err(malformed());
        }

        Ok(Self {
            property: key.to_string(),
            name: name.to_string(),
            version: value.to_string(),
        })
    }
}

impl fmt::Display for SnapshotEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.version)
    }
}

/// Returns true if `name` is one plain directory name (no separators, `.` or `..`)
fn is_single_path_segment(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Extracts one entry per property whose value carries the snapshot marker
pub fn extract_snapshot_entries(
    properties: &BTreeMap<String, String>,
) -> Result<Vec<SnapshotEntry>, ResolveError> {
    properties
        .iter()
        .filter(|(_, value)| is_snapshot(value))
        .map(|(key, value)| SnapshotEntry::from_property(key, value))
        .collect()
}

/// Lists declared dependencies whose interpolated version is a snapshot
pub fn snapshot_dependencies(descriptor: &ProjectDescriptor) -> Vec<DeclaredDependency> {
    descriptor
        .dependencies
        .iter()
        .map(|dep| DeclaredDependency {
            version: descriptor.interpolate(&dep.version),
            ..dep.clone()
        })
        .filter(|dep| is_snapshot(&dep.version))
        .collect()
}
