//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SHOWCASE_*` environment variables.
//! - Apply environment variable values to a `ConfigLoader` instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final config (see builder.rs).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue`.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ColorTheme;

pub const ENV_THEME: &str = "SHOWCASE_THEME";
pub const ENV_TICK_MS: &str = "SHOWCASE_TICK_MS";
pub const ENV_SHARE_URL: &str = "SHOWCASE_SHARE_URL";
pub const ENV_WIDE_COLS: &str = "SHOWCASE_WIDE_COLS";
pub const ENV_START: &str = "SHOWCASE_START";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
///
/// Only fields not already set through builder methods are filled in.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.theme.is_none()
        && let Some(raw) = env_var_or_none(ENV_THEME)
    {
        let theme: ColorTheme = raw.parse().map_err(|e| ConfigError::InvalidValue {
            var: ENV_THEME.to_string(),
            message: format!("{e}"),
        })?;
        loader.theme = Some(theme);
    }
    if loader.tick_interval.is_none()
        && let Some(raw) = env_var_or_none(ENV_TICK_MS)
    {
        let ms: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TICK_MS.to_string(),
            message: "must be a number of milliseconds".to_string(),
        })?;
        loader.tick_interval = Some(Duration::from_millis(ms));
    }
    if loader.share_url.is_none() {
        loader.share_url = env_var_or_none(ENV_SHARE_URL);
    }
    if loader.wide_layout_min_cols.is_none()
        && let Some(raw) = env_var_or_none(ENV_WIDE_COLS)
    {
        let cols: u16 = raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_WIDE_COLS.to_string(),
            message: "must be a column count".to_string(),
        })?;
        loader.wide_layout_min_cols = Some(cols);
    }
    if loader.start_fragment.is_none() {
        loader.start_fragment = env_var_or_none(ENV_START);
    }
    Ok(())
}
