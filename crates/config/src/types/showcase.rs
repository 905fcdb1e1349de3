//! Resolved runtime configuration for the showcase frontend.

use std::time::Duration;
use url::Url;

use super::theme::ColorTheme;

/// Fully validated configuration produced by `ConfigLoader::build`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowcaseConfig {
    /// Palette used for rendering.
    pub theme: ColorTheme,
    /// Interval between UI ticks (timers and animations advance on ticks).
    pub tick_interval: Duration,
    /// Base URL that shareable links are built from.
    pub share_base_url: Url,
    /// Terminal width at which the persistent sidebar is used.
    pub wide_layout_min_cols: u16,
    /// Location fragment to open at startup, if any.
    pub start_fragment: Option<String>,
}

impl ShowcaseConfig {
    /// Shareable link for the given fragment. An empty fragment yields the bare base URL.
    pub fn share_url(&self, fragment: &str) -> Url {
        let mut url = self.share_base_url.clone();
        if fragment.is_empty() {
            url.set_fragment(None);
        } else {
            url.set_fragment(Some(fragment));
        }
        url
    }
}
