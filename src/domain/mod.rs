//! Core domain models for snapdeps
//!
//! This module contains the fundamental types used throughout the application:
//! - Project descriptors and declared dependencies
//! - Version-control references parsed from connection strings
//! - Snapshot entries extracted from project properties
//! - Sibling locations and the registry of resolved siblings

mod descriptor;
mod location;
mod registry;
mod scm;
mod snapshot;

pub use descriptor::{DeclaredDependency, ProjectDescriptor};
pub use location::SiblingLocation;
pub use registry::{DependencyRegistry, ResolvedDependency};
pub use scm::{ScmKind, VersionControlRef};
pub use snapshot::{
    extract_snapshot_entries, is_snapshot, snapshot_dependencies, SnapshotEntry, SNAPSHOT_MARKER,
    VERSION_SUFFIX,
};
