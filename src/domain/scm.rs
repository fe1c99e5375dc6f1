//! Version-control connection strings (`scm:<type>:<url>`)

use crate::error::ScmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Leading segment every connection string must carry
const SCM_PREFIX: &str = "scm";

/// Supported version control systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmKind {
    /// Git
    Git,
    /// Mercurial
    Hg,
}

impl ScmKind {
    /// Returns the tag used in connection strings
    pub fn tag(&self) -> &'static str {
        match self {
            ScmKind::Git => "git",
            ScmKind::Hg => "hg",
        }
    }

    /// Looks up a system by its connection tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Returns all supported systems
    pub fn all() -> &'static [ScmKind] {
        &[ScmKind::Git, ScmKind::Hg]
    }
}

impl fmt::Display for ScmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A parsed version-control location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionControlRef {
    /// Version control system
    pub kind: ScmKind,
    /// Repository location
    pub url: Url,
}

impl VersionControlRef {
    /// Creates a reference from its parts
    pub fn new(kind: ScmKind, url: Url) -> Self {
        Self { kind, url }
    }

    /// Parse a connection string of the form `scm:<type>:<url>`
    ///
    /// Everything after the second colon is the URL, so ports and other
    /// embedded colons survive: `scm:git:http://host:8080/p` yields
    /// `http://host:8080/p`.
    pub fn parse(connection: &str) -> Result<Self, ScmError> {
        let segments: Vec<&str> = connection.split(':').collect();

        if segments[0] != SCM_PREFIX {
            return Err(ScmError::unsupported_format(connection));
        }
        if segments.len() < 3 {
            return Err(ScmError::malformed_connection(connection));
        }

        let kind = ScmKind::from_tag(segments[1])
            .ok_or_else(|| ScmError::unsupported_system(segments[1]))?;

        let raw_url = segments[2..].join(":");
        let url = Url::parse(&raw_url).map_err(|source| ScmError::MalformedScmUrl {
            url: raw_url.clone(),
            source,
        })?;

        Ok(Self { kind, url })
    }

    /// Renders the reference back into connection string form
    pub fn connection(&self) -> String {
        format!("{}:{}:{}", SCM_PREFIX, self.kind, self.url)
    }
}

impl FromStr for VersionControlRef {
    type Err = ScmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionControlRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.url, self.kind)
    }
}
