//! Where a sibling project was found

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Result of locating a sibling project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "at", rename_all = "lowercase")]
pub enum SiblingLocation {
    /// Descriptor file of a checkout next to the root project
    Local(PathBuf),
    /// Repository location confirmed by a network probe
    Remote(Url),
}

impl SiblingLocation {
    /// Returns true for local checkouts
    pub fn is_local(&self) -> bool {
        matches!(self, SiblingLocation::Local(_))
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            SiblingLocation::Local(_) => "local",
            SiblingLocation::Remote(_) => "remote",
        }
    }
}

impl fmt::Display for SiblingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiblingLocation::Local(path) => write!(f, "{}", path.display()),
            SiblingLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}
