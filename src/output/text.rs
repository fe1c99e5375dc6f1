//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Separator-delimited sections: project root, snapshot properties, snapshot dependencies
//! - Aligned list of resolved siblings with where they were found
//! - Sibling repositories in verbose mode

use crate::domain::{ResolvedDependency, SiblingLocation};
use crate::orchestrator::ResolutionReport;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Line printed between report sections
pub const SEPARATOR_LINE: &str =
    "------------------------------------------------------------------------";

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Write a separator followed by a section header
    fn write_header(&self, header: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", SEPARATOR_LINE.dimmed())?;
            writeln!(writer, "{}", header.bold())
        } else {
            writeln!(writer, "{}", SEPARATOR_LINE)?;
            writeln!(writer, "{}", header)
        }
    }

    /// Format a location label, colored by kind
    fn location_label(&self, location: &SiblingLocation) -> String {
        let label = format!("({})", location.label());
        if !self.color {
            return label;
        }
        match location {
            SiblingLocation::Local(_) => label.green().to_string(),
            SiblingLocation::Remote(_) => label.cyan().to_string(),
        }
    }

    /// Format a single resolved sibling line
    fn format_sibling_line(
        &self,
        name: &str,
        dependency: &ResolvedDependency,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let label = self.location_label(&dependency.location);
        if self.color {
            let name_display = format!("{:width$}", name, width = max_name_len);
            writeln!(
                writer,
                "  {} {} {} {}",
                name_display.bold(),
                dependency.version.bright_white(),
                label,
                dependency.location.to_string().dimmed()
            )?;
        } else {
            writeln!(
                writer,
                "  {:width$} {} {} {}",
                name,
                dependency.version,
                label,
                dependency.location,
                width = max_name_len
            )?;
        }

        if self.verbosity == Verbosity::Verbose {
            let repository = match dependency.version_control() {
                Ok(vcs) => vcs.to_string(),
                Err(e) => format!("unknown ({})", e),
            };
            writeln!(writer, "    descriptor: {}", dependency.descriptor)?;
            writeln!(writer, "    repository: {}", repository)?;
        }
        Ok(())
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ResolutionReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            for (name, _) in &report.registry {
                writeln!(writer, "{}", name)?;
            }
            return Ok(());
        }

        self.write_header(
            &format!("Project root found: {}", report.root_file.display()),
            writer,
        )?;
        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "Project: {}", report.root_coordinates)?;
            writeln!(writer, "Repository: {}", report.root_vcs)?;
        }

        self.write_header("SNAPSHOT properties:", writer)?;
        for entry in &report.snapshot_properties {
            writeln!(writer, "{}", entry)?;
        }

        self.write_header("SNAPSHOT dependencies:", writer)?;
        for dependency in &report.snapshot_dependencies {
            writeln!(writer, "{}", dependency)?;
        }

        self.write_header("Resolved siblings:", writer)?;
        if report.registry.is_empty() {
            writeln!(writer, "  (none)")?;
            return Ok(());
        }

        let max_name_len = report
            .registry
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, dependency) in &report.registry {
            self.format_sibling_line(name, dependency, max_name_len, writer)?;
        }

        Ok(())
    }
}
