//! Sibling repository layouts
//!
//! A layout turns the root project's repository URL into the URL where a
//! sibling project is expected to live.

use url::Url;

/// Strategy deriving a sibling's repository URL from the root's
pub trait SiblingLayout: Send + Sync {
    /// Returns the sibling location, or `None` if `root_url` has no path to work on
    fn derive_sibling_location(&self, root_url: &Url, project_name: &str) -> Option<Url>;
}

/// Siblings live next to the root repository: `.../group/root` → `.../group/<name>`
///
/// Works on path segments, so a trailing separator on the root URL does not
/// change the result. Query and fragment are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentLayout;

impl SiblingLayout for AdjacentLayout {
    fn derive_sibling_location(&self, root_url: &Url, project_name: &str) -> Option<Url> {
        // The url crate resolves these instead of pushing them
        if matches!(project_name, "" | "." | "..") {
            return None;
        }
        let mut url = root_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .pop()
            .push(project_name);
        Some(url)
    }
}
