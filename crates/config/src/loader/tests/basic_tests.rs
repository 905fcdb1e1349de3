//! Basic loader tests: defaults, builder overrides and validation.

use std::time::Duration;

use crate::constants::{DEFAULT_UI_TICK_MS, DEFAULT_WIDE_LAYOUT_MIN_COLS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::ColorTheme;

#[test]
fn test_loader_defaults() {
    let config = ConfigLoader::new().build().unwrap();
    assert_eq!(config.theme, ColorTheme::Default);
    assert_eq!(
        config.tick_interval,
        Duration::from_millis(DEFAULT_UI_TICK_MS)
    );
    assert_eq!(config.wide_layout_min_cols, DEFAULT_WIDE_LAYOUT_MIN_COLS);
    assert_eq!(config.share_base_url.as_str(), "http://localhost:5173/");
    assert!(config.start_fragment.is_none());
}

#[test]
fn test_loader_builder_overrides() {
    let config = ConfigLoader::new()
        .with_theme(ColorTheme::Dark)
        .with_tick_interval(Duration::from_millis(100))
        .with_wide_layout_min_cols(120)
        .with_start_fragment("#forms".to_string())
        .build()
        .unwrap();

    assert_eq!(config.theme, ColorTheme::Dark);
    assert_eq!(config.tick_interval, Duration::from_millis(100));
    assert_eq!(config.wide_layout_min_cols, 120);
    assert_eq!(config.start_fragment.as_deref(), Some("#forms"));
}

#[test]
fn test_loader_rejects_tick_out_of_range() {
    let result = ConfigLoader::new()
        .with_tick_interval(Duration::from_millis(1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTickInterval { .. })));

    let result = ConfigLoader::new()
        .with_tick_interval(Duration::from_secs(5))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTickInterval { .. })));
}

#[test]
fn test_loader_rejects_narrow_wide_threshold() {
    let result = ConfigLoader::new().with_wide_layout_min_cols(10).build();
    assert!(matches!(result, Err(ConfigError::InvalidWideLayout { .. })));
}

#[test]
fn test_loader_rejects_invalid_share_url() {
    let result = ConfigLoader::new()
        .with_share_url("not a url".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidShareUrl { .. })));

    let result = ConfigLoader::new()
        .with_share_url("mailto:someone@example.com".to_string())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::ShareUrlNotHierarchical(_))
    ));
}
