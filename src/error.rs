//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ScmError: Issues with version-control connection strings
//! - DescriptorError: Issues reading or parsing project descriptors
//! - ResolveError: Precondition and sibling resolution failures
//! - NetworkError: HTTP probe and fetch failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Version-control connection errors
    #[error(transparent)]
    Scm(#[from] ScmError),

    /// Descriptor read/parse errors
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Resolution errors
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Network errors
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Errors related to version-control connection strings
#[derive(Error, Debug)]
pub enum ScmError {
    /// Descriptor declares no connection string
    #[error("project '{project}' declares no version-control connection")]
    MissingConnection { project: String },

    /// Too few colon-separated segments
    #[error("malformed version-control connection '{connection}': expected 'scm:<type>:<url>'")]
    MalformedConnection { connection: String },

    /// First segment is not `scm`
    #[error("unsupported connection format '{connection}': must start with 'scm:'")]
    UnsupportedConnectionFormat { connection: String },

    /// Unknown system tag
    #[error("unsupported version control system: {tag}")]
    UnsupportedVersionControlSystem { tag: String },

    /// URL part does not parse
    #[error("malformed scm URL '{url}': {source}")]
    MalformedScmUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors related to project descriptor documents
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// File disappeared between the existence check and the read
    #[error("descriptor file vanished: {path}")]
    FileVanished {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read descriptor file
    #[error("failed to read descriptor file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed descriptor document
    #[error("failed to parse descriptor at {location}: {message}")]
    ParseError { location: String, message: String },

    /// File extension maps to no known format
    #[error("unsupported descriptor format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors raised while resolving siblings
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Root directory or root descriptor missing
    #[error("project root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Root directory is not the descriptor's directory
    #[error("project root {root} does not match descriptor directory {descriptor_dir}")]
    RootMismatch {
        root: PathBuf,
        descriptor_dir: PathBuf,
    },

    /// Snapshot property key with no usable project name
    #[error("malformed snapshot property key '{key}': expected '<project>-version'")]
    MalformedPropertyKey { key: String },

    /// Neither a local nor a remote sibling was found
    #[error("sibling project '{project}' not found (tried {candidate}): {reason}")]
    SiblingNotFound {
        project: String,
        candidate: String,
        reason: String,
    },
}

/// Errors related to HTTP communication
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Request exceeded the configured timeout
    #[error("timeout while requesting {url}")]
    Timeout { url: String },

    /// Transport level failure
    #[error("request to {url} failed: {message}")]
    RequestFailed { url: String, message: String },

    /// Server answered with a non-success status
    #[error("unexpected HTTP {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body exceeded the accepted size
    #[error("response from {url} exceeds {limit} bytes")]
    BodyTooLarge { url: String, limit: usize },

    /// HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    ClientBuild { message: String },
}

impl ScmError {
    /// Creates a new MalformedConnection error
    pub fn malformed_connection(connection: impl Into<String>) -> Self {
        ScmError::MalformedConnection {
            connection: connection.into(),
        }
    }

    /// Creates a new UnsupportedConnectionFormat error
    pub fn unsupported_format(connection: impl Into<String>) -> Self {
        ScmError::UnsupportedConnectionFormat {
            connection: connection.into(),
        }
    }

    /// Creates a new UnsupportedVersionControlSystem error
    pub fn unsupported_system(tag: impl Into<String>) -> Self {
        ScmError::UnsupportedVersionControlSystem { tag: tag.into() }
    }
}

impl DescriptorError {
    /// Classifies a read failure: `NotFound` means the file vanished
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DescriptorError::FileVanished { path, source }
        } else {
            DescriptorError::ReadError { path, source }
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(location: impl Into<String>, message: impl Into<String>) -> Self {
        DescriptorError::ParseError {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl ResolveError {
    /// Creates a new RootNotFound error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        ResolveError::RootNotFound { path: path.into() }
    }

    /// Creates a new SiblingNotFound error
    pub fn sibling_not_found(
        project: impl Into<String>,
        candidate: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ResolveError::SiblingNotFound {
            project: project.into(),
            candidate: candidate.into(),
            reason: reason.into(),
        }
    }
}

impl NetworkError {
    /// Maps a reqwest error, keeping timeouts distinct
    pub fn from_reqwest(url: impl Into<String>, err: &reqwest::Error) -> Self {
        let url = url.into();
        if err.is_timeout() {
            NetworkError::Timeout { url }
        } else {
            NetworkError::RequestFailed {
                url,
                message: err.to_string(),
            }
        }
    }

    /// Returns true for timeouts
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Timeout { .. })
    }
}
