//! JSON output formatter for machine processing
//!
//! This module provides:
//! - JSON serialization of resolution reports
//! - Per-sibling location and repository information

use crate::domain::{ResolvedDependency, SiblingLocation};
use crate::orchestrator::ResolutionReport;
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// RFC 3339 start time of the run
    resolved_at: String,
    /// Root project
    root: JsonRoot,
    /// Snapshot properties of the root project
    snapshot_properties: Vec<JsonProperty<'a>>,
    /// Declared snapshot dependencies as `group:artifact:version`
    snapshot_dependencies: Vec<String>,
    /// Resolved siblings, ordered by name
    siblings: Vec<JsonSibling<'a>>,
}

/// JSON representation of the root project
#[derive(Serialize)]
struct JsonRoot {
    /// Descriptor file path
    file: String,
    /// `group:artifact:version`
    coordinates: String,
    /// Repository URL
    repository: String,
    /// Version control system tag
    vcs: String,
}

/// JSON representation of a snapshot property
#[derive(Serialize)]
struct JsonProperty<'a> {
    /// Property key
    key: &'a str,
    /// Project name derived from the key
    name: &'a str,
    /// Snapshot version
    version: &'a str,
}

/// JSON representation of a resolved sibling
#[derive(Serialize)]
struct JsonSibling<'a> {
    /// Project name
    name: &'a str,
    /// Requested version
    version: &'a str,
    /// Where it was found
    location: &'a SiblingLocation,
    /// Sibling's own coordinates (only in verbose mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<String>,
    /// Sibling's repository (only in verbose mode, when declared)
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
}

impl JsonFormatter {
    /// Convert a registry entry to its JSON representation
    fn sibling_to_json<'a>(
        &self,
        name: &'a str,
        dependency: &'a ResolvedDependency,
    ) -> JsonSibling<'a> {
        let verbose = self.verbosity == Verbosity::Verbose;
        JsonSibling {
            name,
            version: &dependency.version,
            location: &dependency.location,
            coordinates: verbose.then(|| dependency.descriptor.coordinates()),
            repository: if verbose {
                dependency
                    .version_control()
                    .ok()
                    .map(|vcs| vcs.connection())
            } else {
                None
            },
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ResolutionReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            resolved_at: report.started_at.to_rfc3339(),
            root: JsonRoot {
                file: report.root_file.display().to_string(),
                coordinates: report.root_coordinates.clone(),
                repository: report.root_vcs.url.to_string(),
                vcs: report.root_vcs.kind.to_string(),
            },
            snapshot_properties: report
                .snapshot_properties
                .iter()
                .map(|entry| JsonProperty {
                    key: &entry.property,
                    name: &entry.name,
                    version: &entry.version,
                })
                .collect(),
            snapshot_dependencies: report
                .snapshot_dependencies
                .iter()
                .map(|dep| dep.to_string())
                .collect(),
            siblings: report
                .registry
                .iter()
                .map(|(name, dependency)| self.sibling_to_json(name, dependency))
                .collect(),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures::sample_report;

    fn render(verbosity: Verbosity) -> serde_json::Value {
        let formatter = JsonFormatter::new(verbosity);
        let mut out = Vec::new();
        formatter.format(&sample_report(), &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_json_output_structure() {
        let json = render(Verbosity::Normal);

        assert_eq!(json["resolved_at"], "2024-01-15T10:30:00+00:00");
        assert_eq!(json["root"]["file"], "/work/app/project.toml");
        assert_eq!(json["root"]["coordinates"], "org.example:app:1.0-SNAPSHOT");
        assert_eq!(json["root"]["repository"], "http://host/group/app");
        assert_eq!(json["root"]["vcs"], "git");

        let properties = json["snapshot_properties"].as_array().unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0]["key"], "core-version");
        assert_eq!(properties[0]["name"], "core");
        assert_eq!(properties[0]["version"], "3.1-SNAPSHOT");

        assert_eq!(
            json["snapshot_dependencies"][0],
            "org.example:lib:1.0-SNAPSHOT"
        );
    }

    #[test]
    fn test_json_siblings() {
        let json = render(Verbosity::Normal);
        let siblings = json["siblings"].as_array().unwrap();

        assert_eq!(siblings.len(), 2);
        assert_eq!(siblings[0]["name"], "core");
        assert_eq!(siblings[0]["location"]["kind"], "remote");
        assert_eq!(siblings[0]["location"]["at"], "http://host/group/core");
        assert_eq!(siblings[1]["name"], "lib");
        assert_eq!(siblings[1]["location"]["kind"], "local");
        assert_eq!(siblings[1]["location"]["at"], "/work/lib/project.toml");
        assert!(siblings[1].get("coordinates").is_none());
    }

    #[test]
    fn test_json_verbose_adds_coordinates() {
        let json = render(Verbosity::Verbose);
        let lib = &json["siblings"][1];

        assert_eq!(lib["coordinates"], "org.example:lib:1.0-SNAPSHOT");
        // No connection declared in the fixture descriptor
        assert!(lib.get("repository").is_none());
    }
}
