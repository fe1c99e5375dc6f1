//! Progress display for sibling resolution
//!
//! One bar per run, one step per snapshot entry. The message names the
//! sibling being resolved and then where it was found.

use crate::domain::{SiblingLocation, SnapshotEntry};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TEMPLATE: &str = "{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}";

/// Progress of one resolution run; cleared when dropped
pub struct SiblingProgress {
    bar: Option<ProgressBar>,
}

impl SiblingProgress {
    /// Starts a bar over `entries`, or a silent reporter when disabled
    ///
    /// Runs without snapshot entries never draw a bar.
    pub fn start(enabled: bool, entries: &[SnapshotEntry]) -> Self {
        if !enabled || entries.is_empty() {
            return Self::hidden();
        }

        let bar = ProgressBar::new(entries.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            bar.set_style(style.progress_chars("█▓▒░"));
        }
        bar.set_message("Resolving siblings");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// A reporter that draws nothing
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    /// Announces the entry about to be located
    pub fn resolving(&self, entry: &SnapshotEntry) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("Resolving {} {}", entry.name, entry.version));
        }
    }

    /// Records a registered sibling and where it came from
    pub fn resolved(&self, entry: &SnapshotEntry, location: &SiblingLocation) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{} ({})", entry.name, location.label()));
            bar.inc(1);
        }
    }

    /// Number of siblings recorded so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }
}

impl Drop for SiblingProgress {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
