//! Registry of resolved sibling projects

use super::{ProjectDescriptor, SiblingLocation, VersionControlRef};
use crate::error::ScmError;
use std::collections::btree_map::{BTreeMap, Iter};

/// A sibling project resolved during one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    /// Sibling's own descriptor
    pub descriptor: ProjectDescriptor,
    /// Version requested by the root project
    pub version: String,
    /// Where the sibling was found
    pub location: SiblingLocation,
    /// Version-control reference, when supplied up front
    version_control: Option<VersionControlRef>,
}

impl ResolvedDependency {
    /// Creates a record with the version-control reference deferred
    pub fn new(
        descriptor: ProjectDescriptor,
        version: impl Into<String>,
        location: SiblingLocation,
    ) -> Self {
        Self {
            descriptor,
            version: version.into(),
            location,
            version_control: None,
        }
    }

    /// Supplies the version-control reference (builder pattern)
    pub fn with_version_control(mut self, vcs: VersionControlRef) -> Self {
        self.version_control = Some(vcs);
        self
    }

    /// Returns the supplied reference or parses it from the descriptor
    pub fn version_control(&self) -> Result<VersionControlRef, ScmError> {
        match &self.version_control {
            Some(vcs) => Ok(vcs.clone()),
            None => self.descriptor.version_control(),
        }
    }
}

/// Project name → resolved sibling, last write wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyRegistry {
    entries: BTreeMap<String, ResolvedDependency>,
}

impl DependencyRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an entry, returning the previous one
    pub fn put(
        &mut self,
        name: impl Into<String>,
        dependency: ResolvedDependency,
    ) -> Option<ResolvedDependency> {
        self.entries.insert(name.into(), dependency)
    }

    /// Looks up an entry by project name
    pub fn get(&self, name: &str) -> Option<&ResolvedDependency> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries ordered by project name
    pub fn iter(&self) -> Iter<'_, String, ResolvedDependency> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a DependencyRegistry {
    type Item = (&'a String, &'a ResolvedDependency);
    type IntoIter = Iter<'a, String, ResolvedDependency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
