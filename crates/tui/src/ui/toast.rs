//! Toast notifications for transient feedback.
//!
//! Toasts are stacked in the bottom-right corner above the footer. Each toast
//! has a unique id, a severity level and a time-to-live after which it is
//! pruned on the next tick.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use showcase_config::Theme;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts displayed at once.
pub const MAX_TOASTS: usize = 5;

const TOAST_WIDTH: u16 = 44;

/// Render the most recent non-expired toasts in the bottom-right corner.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let active = &active[active.len().saturating_sub(MAX_TOASTS)..];

    let inner_width = TOAST_WIDTH.saturating_sub(2 + 6) as usize;
    let heights: Vec<u16> = active
        .iter()
        .map(|toast| if toast.message.chars().count() > inner_width { 4 } else { 3 })
        .collect();
    let total_height: u16 = heights.iter().sum();

    let area = f.area();
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height + 2
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height + 1),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(heights.iter().map(|h| Constraint::Length(*h)))
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, inner_width, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, inner_width: usize, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let chars: Vec<char> = toast.message.chars().collect();
    let mut wrapped: Vec<String> = chars
        .chunks(inner_width.max(1))
        .take(2)
        .map(|c| c.iter().collect())
        .collect();
    if chars.len() > inner_width * 2
        && let Some(last) = wrapped.last_mut()
    {
        last.pop();
        last.push('…');
    }

    let label = format!(" {:<4} ", toast.level.label());
    let mut lines = vec![Line::from(vec![
        Span::styled(
            label.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(wrapped.first().cloned().unwrap_or_default(), Style::default().fg(theme.text)),
    ])];
    for line in wrapped.iter().skip(1) {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(label.chars().count())),
            Span::styled(line.clone(), Style::default().fg(theme.text)),
        ]));
    }

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        area,
    );
}
