//! On-disk document shape shared by every descriptor format

use crate::domain::{DeclaredDependency, ProjectDescriptor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Top-level descriptor document
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DescriptorDocument {
    project: ProjectSection,
    #[serde(default)]
    scm: Option<ScmSection>,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
    #[serde(default)]
    dependencies: Vec<DeclaredDependency>,
}

/// `[project]` section
#[derive(Debug, Deserialize)]
struct ProjectSection {
    group: String,
    artifact: String,
    version: String,
}

/// `[scm]` section
#[derive(Debug, Deserialize)]
struct ScmSection {
    connection: String,
}

/// Property values are stored as text whatever their scalar type
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PropertyValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(s) => write!(f, "{}", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(x) => write!(f, "{}", x),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<DescriptorDocument> for ProjectDescriptor {
    fn from(doc: DescriptorDocument) -> Self {
        ProjectDescriptor {
            group: doc.project.group,
            artifact: doc.project.artifact,
            version: doc.project.version,
            properties: doc
                .properties
                .into_iter()
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
            dependencies: doc.dependencies,
            scm_connection: doc.scm.map(|scm| scm.connection),
            file: None,
        }
    }
}
