//! Single-line text field built on tui-input.
//!
//! Provides cursor-aware editing, placeholder text and optional masking for
//! password entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use showcase_config::Theme;
use tui_input::{Input, InputRequest};

use crate::ui::theme::ThemeExt;

#[derive(Debug, Clone, Default)]
pub struct TextField {
    input: Input,
    placeholder: &'static str,
    masked: bool,
}

impl TextField {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            input: Input::default(),
            placeholder,
            masked: false,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.input = Input::new(value.into());
        self
    }

    /// Apply an editing key. Returns true when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.input.value().to_string();

        let request = if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            }
        } else {
            match key.code {
                KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
                KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
                KeyCode::Delete => Some(InputRequest::DeleteNextChar),
                KeyCode::Left => Some(InputRequest::GoToPrevChar),
                KeyCode::Right => Some(InputRequest::GoToNextChar),
                KeyCode::Home => Some(InputRequest::GoToStart),
                KeyCode::End => Some(InputRequest::GoToEnd),
                _ => None,
            }
        };

        if let Some(request) = request {
            self.input.handle(request);
        }
        self.input.value() != before
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_blank(&self) -> bool {
        self.input.value().trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.input.reset();
    }

    fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.input.value().chars().count())
        } else {
            self.input.value().to_string()
        }
    }

    /// One-line render: `label value`, with a block cursor while editing.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        label: &str,
        editing: bool,
        theme: &Theme,
    ) {
        if area.height == 0 {
            return;
        }
        let label_span = Span::styled(format!("{label} "), theme.text_dim());
        let field_width = usize::from(area.width)
            .saturating_sub(label.chars().count() + 1)
            .max(1);

        let body = if self.input.value().is_empty() && !editing {
            vec![Span::styled(
                self.placeholder,
                theme.disabled().add_modifier(Modifier::ITALIC),
            )]
        } else {
            let text = self.display_value();
            let scroll = self.input.visual_scroll(field_width.saturating_sub(1));
            let visible: String = text.chars().skip(scroll).take(field_width).collect();
            if editing {
                let cursor = self.input.visual_cursor().saturating_sub(scroll);
                let before: String = visible.chars().take(cursor).collect();
                let at: String = visible.chars().skip(cursor).take(1).collect();
                let after: String = visible.chars().skip(cursor + 1).collect();
                vec![
                    Span::styled(before, theme.text()),
                    Span::styled(
                        if at.is_empty() { " ".to_string() } else { at },
                        Style::default().fg(theme.background).bg(theme.accent),
                    ),
                    Span::styled(after, theme.text()),
                ]
            } else {
                vec![Span::styled(visible, theme.text())]
            }
        };

        let mut spans = vec![label_span];
        spans.extend(body);
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
