//! Resolution orchestrator for coordinating one resolution run
//!
//! This module provides:
//! - Workflow coordination: validate root → parse scm → extract → locate → load → register
//! - Sequential processing of snapshot entries (one network round trip at a time)
//! - Abort on first failure, surfacing the originating error

use crate::descriptor::{DescriptorFormat, DescriptorLoader};
use crate::domain::{
    extract_snapshot_entries, snapshot_dependencies, DeclaredDependency, DependencyRegistry,
    ProjectDescriptor, ResolvedDependency, SnapshotEntry, VersionControlRef,
};
use crate::error::{AppError, DescriptorError, ResolveError};
use crate::locator::{AdjacentLayout, SiblingLayout, SiblingLocator};
use crate::progress::SiblingProgress;
use crate::remote::{HttpClient, RemoteSource};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for the resolver
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Timeout applied to every network request
    pub timeout: Duration,
    /// Whether to show a progress spinner
    pub show_progress: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout: crate::remote::DEFAULT_TIMEOUT,
            show_progress: false,
        }
    }
}

/// Resolves the snapshot siblings of a root project
pub struct Resolver {
    remote: Box<dyn RemoteSource>,
    layout: Box<dyn SiblingLayout>,
    show_progress: bool,
}

/// Result of a successful resolution run
#[derive(Debug, Clone)]
pub struct ResolutionReport {
    /// Canonical path of the root descriptor file
    pub root_file: PathBuf,
    /// Root project's identity (`group:artifact:version`)
    pub root_coordinates: String,
    /// Root project's repository
    pub root_vcs: VersionControlRef,
    /// Snapshot properties found in the root project
    pub snapshot_properties: Vec<SnapshotEntry>,
    /// Declared dependencies on snapshot versions
    pub snapshot_dependencies: Vec<DeclaredDependency>,
    /// Resolved siblings
    pub registry: DependencyRegistry,
    /// When the run started
    pub started_at: DateTime<Utc>,
}

impl Resolver {
    /// Create a resolver talking HTTP with the configured timeout
    pub fn new(config: ResolverConfig) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(config.timeout)?;
        Ok(Self::with_remote(Box::new(client)).with_progress(config.show_progress))
    }

    /// Create a resolver with a custom remote source (for testing)
    pub fn with_remote(remote: Box<dyn RemoteSource>) -> Self {
        Self {
            remote,
            layout: Box::new(AdjacentLayout),
            show_progress: false,
        }
    }

    /// Replace the sibling layout
    pub fn with_layout(mut self, layout: Box<dyn SiblingLayout>) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable the progress spinner
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Run one resolution for `root`, checked out at `root_dir`
    pub async fn resolve(
        &self,
        root: &ProjectDescriptor,
        root_dir: &Path,
    ) -> Result<ResolutionReport, AppError> {
        let started_at = Utc::now();

        // Step 1: Validate the root before anything else
        let (root_dir, root_file) = validate_root(root, root_dir)?;
        let format = DescriptorFormat::from_path(&root_file).ok_or_else(|| {
            DescriptorError::UnsupportedFormat {
                path: root_file.clone(),
            }
        })?;
        let descriptor_name = root_file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DescriptorError::UnsupportedFormat {
                path: root_file.clone(),
            })?
            .to_string();

        // Step 2: Root repository
        let root_vcs = root.version_control()?;

        // Step 3: Snapshot markers
        let entries = extract_snapshot_entries(&root.properties)?;
        let snapshot_deps = snapshot_dependencies(root);

        // Step 4: Locate, load and register each sibling
        let locator = SiblingLocator::new(&*self.remote, &*self.layout, &descriptor_name);
        let loader = DescriptorLoader::new(&*self.remote, &descriptor_name, format);
        let mut registry = DependencyRegistry::new();

        // Dropping the reporter clears the bar on every exit path
        let progress = SiblingProgress::start(self.show_progress, &entries);
        for entry in &entries {
            progress.resolving(entry);
            let location = locator.locate(&entry.name, &root_dir, &root_vcs).await?;
            let descriptor = loader.load(&location).await?;
            progress.resolved(entry, &location);
            registry.put(
                entry.name.clone(),
                ResolvedDependency::new(descriptor, &entry.version, location),
            );
        }
        drop(progress);

        Ok(ResolutionReport {
            root_file,
            root_coordinates: root.coordinates(),
            root_vcs,
            snapshot_properties: entries,
            snapshot_dependencies: snapshot_deps,
            registry,
            started_at,
        })
    }
}

/// Checks that `root_dir` is exactly the directory of the root descriptor
///
/// Returns the canonical root directory and descriptor file.
fn validate_root(
    root: &ProjectDescriptor,
    root_dir: &Path,
) -> Result<(PathBuf, PathBuf), AppError> {
    if root_dir.as_os_str().is_empty() {
        return Err(ResolveError::root_not_found(root_dir).into());
    }
    let canonical_dir = root_dir
        .canonicalize()
        .map_err(|_| ResolveError::root_not_found(root_dir))?;

    let file = root
        .file()
        .ok_or_else(|| ResolveError::root_not_found(root_dir))?;
    let canonical_file = file
        .canonicalize()
        .map_err(|_| ResolveError::root_not_found(file))?;
    if !canonical_file.is_file() {
        return Err(ResolveError::root_not_found(file).into());
    }

    let descriptor_dir = canonical_file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    if descriptor_dir != canonical_dir {
        return Err(ResolveError::RootMismatch {
            root: canonical_dir,
            descriptor_dir,
        }
        .into());
    }

    Ok((canonical_dir, canonical_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;
    use url::Url;

    /// Remote that must never be called
    struct NoNetwork;

    #[async_trait]
    impl RemoteSource for NoNetwork {
        async fn exists(&self, url: &Url) -> Result<bool, NetworkError> {
            panic!("unexpected probe of {}", url);
        }

        async fn fetch(&self, url: &Url) -> Result<Vec<u8>, NetworkError> {
            panic!("unexpected fetch of {}", url);
        }
    }

    fn write_descriptor(dir: &Path, artifact: &str, extra: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join("project.toml");
        fs::write(
            &path,
            format!(
                "[project]\ngroup = \"org.example\"\nartifact = \"{}\"\nversion = \"1.0-SNAPSHOT\"\n{}",
                artifact, extra
            ),
        )
        .unwrap();
        path
    }

    fn root_descriptor(path: &Path) -> ProjectDescriptor {
        ProjectDescriptor::new("org.example", "app", "1.0-SNAPSHOT")
            .with_scm_connection("scm:git:http://host/group/app")
            .with_property("lib-version", "1.0-SNAPSHOT")
            .with_property("stable-version", "2.0")
            .with_file(path)
    }

    #[test]
    fn test_resolver_config_default() {
        let config = ResolverConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.show_progress);
    }

    #[test]
    fn test_resolver_new() {
        assert!(Resolver::new(ResolverConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_resolve_local_sibling() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        write_descriptor(&dir.path().join("lib"), "lib", "");

        let resolver = Resolver::with_remote(Box::new(NoNetwork));
        let report = resolver
            .resolve(&root_descriptor(&root_file), &dir.path().join("app"))
            .await
            .unwrap();

        assert_eq!(report.registry.len(), 1);
        let lib = report.registry.get("lib").unwrap();
        assert_eq!(lib.version, "1.0-SNAPSHOT");
        assert_eq!(lib.descriptor.artifact, "lib");
        assert!(lib.location.is_local());
        assert!(report.registry.get("stable").is_none());
        assert_eq!(report.snapshot_properties.len(), 1);
        assert_eq!(report.root_coordinates, "org.example:app:1.0-SNAPSHOT");
    }

    #[tokio::test]
    async fn test_resolve_root_mismatch_before_scanning() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        fs::create_dir_all(dir.path().join("elsewhere")).unwrap();

        // Malformed key would fail extraction if scanning happened first
        let root = root_descriptor(&root_file).with_property("broken", "1-SNAPSHOT");
        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, &dir.path().join("elsewhere"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::RootMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_parent_dir_is_mismatch() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root_descriptor(&root_file), dir.path())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::RootMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_empty_root_dir() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root_descriptor(&root_file), Path::new(""))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::RootNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_descriptor_without_file() {
        let dir = TempDir::new().unwrap();
        let root = ProjectDescriptor::new("org.example", "app", "1.0")
            .with_scm_connection("scm:git:http://host/group/app");

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, dir.path())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::RootNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_bad_connection_aborts() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        let root = root_descriptor(&root_file).with_scm_connection("scm:svn:http://host/app");

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, &dir.path().join("app"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Scm(_)));
    }

    #[tokio::test]
    async fn test_resolve_malformed_property_key() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        let root = root_descriptor(&root_file).with_property("libVersion", "1.0-SNAPSHOT");

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, &dir.path().join("app"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::MalformedPropertyKey { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_rejects_parent_dir_project_name() {
        let dir = TempDir::new().unwrap();
        let root_dir = dir.path().join("ws").join("app");
        let root_file = write_descriptor(&root_dir, "app", "");
        // Would be picked up if `..` were joined onto the workspace
        write_descriptor(dir.path(), "outside", "");
        let root = ProjectDescriptor::new("org.example", "app", "1.0")
            .with_scm_connection("scm:git:http://host/group/app")
            .with_property("..-version", "1-SNAPSHOT")
            .with_file(&root_file);

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, &root_dir)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Resolve(ResolveError::MalformedPropertyKey { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_malformed_sibling_descriptor() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        fs::create_dir_all(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib").join("project.toml"), "not = [valid").unwrap();

        let err = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root_descriptor(&root_file), &dir.path().join("app"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Descriptor(DescriptorError::ParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_resolve_reports_snapshot_dependencies() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        write_descriptor(&dir.path().join("lib"), "lib", "");
        let root = root_descriptor(&root_file)
            .with_dependency(DeclaredDependency::new("org.example", "lib", "${lib-version}"))
            .with_dependency(DeclaredDependency::new("com.acme", "stable", "${stable-version}"));

        let report = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, &dir.path().join("app"))
            .await
            .unwrap();

        assert_eq!(report.snapshot_dependencies.len(), 1);
        assert_eq!(
            report.snapshot_dependencies[0].to_string(),
            "org.example:lib:1.0-SNAPSHOT"
        );
    }

    #[tokio::test]
    async fn test_resolve_without_snapshots() {
        let dir = TempDir::new().unwrap();
        let root_file = write_descriptor(&dir.path().join("app"), "app", "");
        let root = ProjectDescriptor::new("org.example", "app", "1.0")
            .with_scm_connection("scm:hg:http://host/group/app")
            .with_property("stable-version", "2.0")
            .with_file(&root_file);

        let report = Resolver::with_remote(Box::new(NoNetwork))
            .resolve(&root, &dir.path().join("app"))
            .await
            .unwrap();

        assert!(report.registry.is_empty());
        assert!(report.snapshot_properties.is_empty());
    }
}
