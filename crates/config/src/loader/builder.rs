//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Build and validate the final `ShowcaseConfig`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::time::Duration;
use url::Url;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_SHARE_BASE_URL, DEFAULT_UI_TICK_MS, DEFAULT_WIDE_LAYOUT_MIN_COLS, MAX_UI_TICK_MS,
    MIN_UI_TICK_MS, MIN_WIDE_LAYOUT_COLS,
};
use crate::types::{ColorTheme, ShowcaseConfig};

/// Configuration loader that builds config from builder overrides and environment variables.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    pub(super) theme: Option<ColorTheme>,
    pub(super) tick_interval: Option<Duration>,
    pub(super) share_url: Option<String>,
    pub(super) wide_layout_min_cols: Option<u16>,
    pub(super) start_fragment: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Fill unset fields from `SHOWCASE_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = Some(interval);
        self
    }

    pub fn with_share_url(mut self, url: String) -> Self {
        self.share_url = Some(url);
        self
    }

    pub fn with_wide_layout_min_cols(mut self, cols: u16) -> Self {
        self.wide_layout_min_cols = Some(cols);
        self
    }

    pub fn with_start_fragment(mut self, fragment: String) -> Self {
        self.start_fragment = Some(fragment);
        self
    }

    /// Validate and build the final configuration.
    pub fn build(self) -> Result<ShowcaseConfig, ConfigError> {
        let tick_interval = self
            .tick_interval
            .unwrap_or(Duration::from_millis(DEFAULT_UI_TICK_MS));
        let tick_ms = tick_interval.as_millis();
        if tick_ms < u128::from(MIN_UI_TICK_MS) || tick_ms > u128::from(MAX_UI_TICK_MS) {
            return Err(ConfigError::InvalidTickInterval {
                message: format!(
                    "{tick_ms}ms is outside the accepted range {MIN_UI_TICK_MS}..={MAX_UI_TICK_MS}ms"
                ),
            });
        }

        let wide_layout_min_cols = self
            .wide_layout_min_cols
            .unwrap_or(DEFAULT_WIDE_LAYOUT_MIN_COLS);
        if wide_layout_min_cols < MIN_WIDE_LAYOUT_COLS {
            return Err(ConfigError::InvalidWideLayout {
                message: format!(
                    "{wide_layout_min_cols} columns is below the minimum of {MIN_WIDE_LAYOUT_COLS}"
                ),
            });
        }

        let raw_url = self
            .share_url
            .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string());
        let share_base_url = Url::parse(&raw_url).map_err(|source| ConfigError::InvalidShareUrl {
            value: raw_url.clone(),
            source,
        })?;
        if share_base_url.cannot_be_a_base() {
            return Err(ConfigError::ShareUrlNotHierarchical(raw_url));
        }

        Ok(ShowcaseConfig {
            theme: self.theme.unwrap_or_default(),
            tick_interval,
            share_base_url,
            wide_layout_min_cols,
            start_fragment: self.start_fragment,
        })
    }
}
