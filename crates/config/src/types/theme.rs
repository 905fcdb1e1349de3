//! Theme types for the showcase.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Parse theme names from CLI flags and environment variables.
//!
//! Does NOT handle:
//! - Actual rendering (see the TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.
//! - Colors are semantically named (error/warning/success/info) for consistent usage.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Configuration key accepted by `--theme` and `SHOWCASE_THEME`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }

    /// Next theme in the cycle (bound to the `t` key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a theme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown theme '{}' (expected one of: default, light, dark, high_contrast, monochrome)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ColorTheme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.key() == normalized)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Configure `ColorTheme` and expand on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Tables
    pub table_header_fg: Color,
    pub table_header_bg: Color,

    // Shell
    pub progress_fill: Color,
    pub sidebar_active: Color,
}

impl Theme {
    /// Expand a configured `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::DarkGray,

                table_header_fg: Color::Cyan,
                table_header_bg: Color::DarkGray,

                progress_fill: Color::Blue,
                sidebar_active: Color::Cyan,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,

                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,

                progress_fill: Color::Blue,
                sidebar_active: Color::Magenta,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue/cyan
                title: Color::Indexed(110),
                accent: Color::Indexed(214), // orange-ish

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Indexed(110),
                disabled: Color::DarkGray,

                table_header_fg: Color::Indexed(110),
                table_header_bg: Color::Indexed(236),

                progress_fill: Color::Indexed(75),
                sidebar_active: Color::Indexed(214),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,

                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,

                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                disabled: Color::Gray,

                table_header_fg: Color::Black,
                table_header_bg: Color::White,

                progress_fill: Color::Yellow,
                sidebar_active: Color::Yellow,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Reset,
                text: Color::Reset,
                text_dim: Color::Gray,
                border: Color::Gray,
                title: Color::White,
                accent: Color::White,

                highlight_fg: Color::Black,
                highlight_bg: Color::White,

                success: Color::White,
                warning: Color::White,
                error: Color::White,
                info: Color::White,
                disabled: Color::DarkGray,

                table_header_fg: Color::Black,
                table_header_bg: Color::Gray,

                progress_fill: Color::White,
                sidebar_active: Color::White,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_theme_once() {
        let mut theme = ColorTheme::Default;
        let mut seen = Vec::new();
        for _ in 0..ColorTheme::ALL.len() {
            seen.push(theme);
            theme = theme.cycle_next();
        }
        assert_eq!(theme, ColorTheme::Default);
        for candidate in ColorTheme::ALL {
            assert!(seen.contains(&candidate), "{candidate:?} missing from cycle");
        }
    }

    #[test]
    fn test_from_str_accepts_keys_and_dashes() {
        assert_eq!("dark".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert_eq!(
            "High-Contrast".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert!("solarized".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&ColorTheme::HighContrast).unwrap();
        assert_eq!(json, "\"high_contrast\"");
    }

    #[test]
    fn test_monochrome_has_no_semantic_colors() {
        let theme = Theme::from_color_theme(ColorTheme::Monochrome);
        assert_eq!(theme.error, theme.success);
    }
}
