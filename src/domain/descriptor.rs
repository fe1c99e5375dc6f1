//! Project descriptor model

use super::VersionControlRef;
use crate::error::ScmError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Property reference inside a value: ${lib-version}
static PROPERTY_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// A dependency declared by a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    /// Group identifier
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Version string as written (may reference properties)
    pub version: String,
}

impl DeclaredDependency {
    /// Creates a new declared dependency
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for DeclaredDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// A parsed project descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDescriptor {
    /// Group identifier
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Project version
    pub version: String,
    /// Declared properties, values as text
    pub properties: BTreeMap<String, String>,
    /// Declared dependencies in document order
    pub dependencies: Vec<DeclaredDependency>,
    /// Version-control connection string (`scm:<type>:<url>`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_connection: Option<String>,
    /// File this descriptor was read from, if it came from disk
    #[serde(skip)]
    pub file: Option<PathBuf>,
}

impl ProjectDescriptor {
    /// Creates a descriptor with the given identity and nothing else
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            properties: BTreeMap::new(),
            dependencies: Vec::new(),
            scm_connection: None,
            file: None,
        }
    }

    /// Adds a property (builder pattern)
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Adds a dependency (builder pattern)
    pub fn with_dependency(mut self, dependency: DeclaredDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Sets the connection string (builder pattern)
    pub fn with_scm_connection(mut self, connection: impl Into<String>) -> Self {
        self.scm_connection = Some(connection.into());
        self
    }

    /// Records the file the descriptor was read from (builder pattern)
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Returns the source file, if any
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Returns `group:artifact:version`
    pub fn coordinates(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }

    /// Parses the version-control connection of this project
    pub fn version_control(&self) -> Result<VersionControlRef, ScmError> {
        let connection =
            self.scm_connection
                .as_deref()
                .ok_or_else(|| ScmError::MissingConnection {
                    project: self.artifact.clone(),
                })?;
        VersionControlRef::parse(connection)
    }

    /// Expands `${name}` references from this project's properties
    ///
    /// Unknown references are left untouched.
    pub fn interpolate(&self, value: &str) -> String {
        PROPERTY_REF_RE
            .replace_all(value, |caps: &regex::Captures| {
                self.properties
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl fmt::Display for ProjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coordinates())
    }
}
