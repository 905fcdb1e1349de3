//! Theme helpers and style builders.
//!
//! This module extends `showcase_config::Theme` with helpers for building
//! ratatui `Style` objects consistently across the UI.

use ratatui::style::{Modifier, Style};
use showcase_config::Theme;

/// Spinner characters for animated loading indicators.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner character for an animation frame.
pub fn spinner_char(frame: u64) -> char {
    SPINNER_CHARS[(frame % SPINNER_CHARS.len() as u64) as usize]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    /// Title style (accent + bold).
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    fn table_header(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .bg(self.table_header_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Helper functions for common style patterns.
pub mod helpers {
    use super::*;

    /// Style for the selected item in a list.
    pub fn selected_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn primary_button_style(theme: &Theme) -> Style {
        Style::default()
            .fg(theme.background)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn secondary_button_style(theme: &Theme) -> Style {
        Style::default().fg(theme.text).bg(theme.highlight_bg)
    }
}
