//! Command-line argument parsing for ui-showcase.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Turn parsed flags into `ConfigLoader` overrides.
//!
//! Does NOT handle:
//! - Validation of the final configuration (see `showcase_config::ConfigLoader::build`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Flags override environment variables, which override defaults.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use showcase_config::{ColorTheme, ConfigLoader};

/// Command-line arguments for ui-showcase.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme, --share-url)
/// 2. Environment variables (e.g., SHOWCASE_THEME, SHOWCASE_SHARE_URL), `.env` included
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "ui-showcase",
    about = "Terminal showcase of interactive UI components",
    version,
    after_help = "Examples:\n  ui-showcase\n  ui-showcase --start forms\n  ui-showcase --theme dark --tick-ms 33\n  ui-showcase --share-url https://demo.example.com/ --no-mouse\n"
)]
pub struct Cli {
    /// Location fragment to open at startup (basics, forms, interactions)
    #[arg(long, env = "SHOWCASE_START")]
    pub start: Option<String>,

    /// Color theme (default, light, dark, high_contrast, monochrome)
    #[arg(long)]
    pub theme: Option<ColorTheme>,

    /// UI tick interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Base URL used when sharing the current page
    #[arg(long)]
    pub share_url: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Apply the flags that were given on top of `loader`.
    pub fn apply_to(&self, mut loader: ConfigLoader) -> ConfigLoader {
        if let Some(start) = &self.start {
            loader = loader.with_start_fragment(start.clone());
        }
        if let Some(theme) = self.theme {
            loader = loader.with_theme(theme);
        }
        if let Some(ms) = self.tick_ms {
            loader = loader.with_tick_interval(Duration::from_millis(ms));
        }
        if let Some(url) = &self.share_url {
            loader = loader.with_share_url(url.clone());
        }
        loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults() {
        temp_env::with_var_unset("SHOWCASE_START", || {
            let cli = Cli::parse_from(["ui-showcase"]);
            assert_eq!(cli.start, None);
            assert_eq!(cli.log_dir, PathBuf::from("logs"));
            assert!(!cli.no_mouse);
        });
    }

    #[test]
    #[serial]
    fn test_start_from_env() {
        temp_env::with_var("SHOWCASE_START", Some("interactions"), || {
            let cli = Cli::parse_from(["ui-showcase"]);
            assert_eq!(cli.start.as_deref(), Some("interactions"));
        });
    }

    #[test]
    fn test_theme_flag_parses() {
        let cli = Cli::parse_from(["ui-showcase", "--theme", "high-contrast"]);
        assert_eq!(cli.theme, Some(ColorTheme::HighContrast));
        assert!(Cli::try_parse_from(["ui-showcase", "--theme", "neon"]).is_err());
    }

    #[test]
    #[serial]
    fn test_flags_become_overrides() {
        temp_env::with_var_unset("SHOWCASE_START", || {
            let cli = Cli::parse_from([
                "ui-showcase",
                "--start",
                "forms",
                "--tick-ms",
                "40",
                "--share-url",
                "https://demo.example.com/app/",
            ]);
            let config = cli.apply_to(ConfigLoader::new()).build().unwrap();
            assert_eq!(config.start_fragment.as_deref(), Some("forms"));
            assert_eq!(config.tick_interval, Duration::from_millis(40));
            assert_eq!(
                config.share_url("forms").as_str(),
                "https://demo.example.com/app/#forms"
            );
        });
    }

    #[test]
    fn test_no_mouse_flag() {
        let cli = Cli::parse_from(["ui-showcase", "--no-mouse", "--log-dir", "/tmp/showcase"]);
        assert!(cli.no_mouse);
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/showcase"));
    }
}
