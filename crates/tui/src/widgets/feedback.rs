//! Feedback demos: progress bars, skeleton loader, snackbar, toasts and
//! tooltips.
//!
//! Every timer here is owned by its section; dropping the page drops them.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};
use showcase_config::constants::{
    DOWNLOAD_INTERVAL_MS, PROGRESS_INTERVAL_MS, SKELETON_LOAD_MS, SNACKBAR_MS, TOAST_STAGGER_MS,
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::runtime::timer::{Delay, Interval, Schedule};
use crate::ui::ToastLevel;
use crate::ui::theme::{ThemeExt, spinner_char};

use super::common::{button, progress_bar, render_card, write_lines};

/// Looping progress plus an on-demand download.
#[derive(Debug)]
pub struct ProgressSection {
    auto: u16,
    auto_timer: Interval,
    download: Option<u16>,
    download_timer: Interval,
}

impl ProgressSection {
    pub fn new(now: Instant) -> Self {
        Self {
            auto: 0,
            auto_timer: Interval::started(Duration::from_millis(PROGRESS_INTERVAL_MS), now),
            download: None,
            download_timer: Interval::new(Duration::from_millis(DOWNLOAD_INTERVAL_MS)),
        }
    }

    pub fn auto_progress(&self) -> u16 {
        self.auto
    }

    pub fn download_progress(&self) -> Option<u16> {
        self.download
    }

    pub fn is_downloading(&self) -> bool {
        self.download_timer.is_running()
    }
}

impl Section for ProgressSection {
    fn title(&self) -> &'static str {
        "Progress"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 9
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let bar_width = inner.width.min(60);
        let download_label = match self.download {
            Some(100) => "Download complete",
            Some(_) => "Downloading…",
            None => "Press Enter to download",
        };
        let lines = vec![
            Line::from(Span::styled("Auto progress", ctx.theme.text_dim())),
            progress_bar(self.auto, bar_width, ctx.theme),
            Line::from(Span::styled("File upload", ctx.theme.text_dim())),
            progress_bar(75, bar_width, ctx.theme),
            Line::from(Span::styled("Installing", ctx.theme.text_dim())),
            progress_bar(30, bar_width, ctx.theme),
            Line::default(),
            Line::from(vec![
                button("Download", ctx.focused && !self.is_downloading(), ctx.theme),
                Span::styled(format!("  {download_label}"), ctx.theme.text_dim()),
            ]),
            progress_bar(self.download.unwrap_or(0), bar_width, ctx.theme),
        ];
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !self.is_downloading() => {
                self.download = Some(0);
                self.download_timer.start(fx.now());
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.auto_timer.poll(fx.now()) {
            self.auto = if self.auto >= 100 { 0 } else { self.auto + 2 };
        }
        if self.download_timer.poll(fx.now()) {
            let current = self.download.unwrap_or(0);
            if current >= 100 {
                self.download_timer.stop();
                fx.success("Download complete!");
            } else {
                self.download = Some((current + 5).min(100));
            }
        }
    }

    fn hints(&self) -> &'static str {
        "Enter start download"
    }
}

/// Placeholder blocks shown while simulated content loads.
#[derive(Debug, Default)]
pub struct SkeletonSection {
    loading: Delay,
    started: Option<Instant>,
    loaded: bool,
}

impl SkeletonSection {
    pub fn is_loading(&self) -> bool {
        self.loading.is_pending()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl Section for SkeletonSection {
    fn title(&self) -> &'static str {
        "Skeleton loader"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 5
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let width = usize::from(inner.width.saturating_sub(2));
        let lines = if let Some(started) = self.started.filter(|_| self.is_loading()) {
            let frame = ctx.now.saturating_duration_since(started).as_millis() / 80;
            let block = ctx.theme.disabled();
            vec![
                Line::from(vec![
                    Span::styled(format!("{} ", spinner_char(frame as u64)), ctx.theme.info()),
                    Span::styled("Loading…", ctx.theme.text_dim()),
                ]),
                Line::from(Span::styled("▆".repeat(width / 2), block)),
                Line::from(Span::styled("▆".repeat(width), block)),
                Line::from(Span::styled("▆".repeat(width * 3 / 4), block)),
            ]
        } else if self.loaded {
            vec![
                Line::from(Span::styled("Loading complete!", ctx.theme.success())),
                Line::from(Span::styled(
                    "The real content replaces the placeholder once it arrives.",
                    ctx.theme.text(),
                )),
                Line::default(),
                Line::from(button("Reload", ctx.focused, ctx.theme)),
            ]
        } else {
            vec![
                Line::from(Span::styled("Content appears after a short load.", ctx.theme.text_dim())),
                Line::default(),
                Line::from(button("Load content", ctx.focused, ctx.theme)),
            ]
        };
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !self.is_loading() => {
                self.loaded = false;
                self.started = Some(fx.now());
                self.loading
                    .schedule(fx.now(), Duration::from_millis(SKELETON_LOAD_MS));
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.loading.fire(fx.now()) {
            self.loaded = true;
        }
    }

    fn hints(&self) -> &'static str {
        "Enter load"
    }
}

#[derive(Debug, Default)]
pub struct SnackbarSection {
    visible: Delay,
}

impl SnackbarSection {
    pub fn is_visible(&self) -> bool {
        self.visible.is_pending()
    }
}

impl Section for SnackbarSection {
    fn title(&self) -> &'static str {
        "Snackbar"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = vec![Line::from(button("Show snackbar", ctx.focused, ctx.theme)), Line::default()];
        if self.is_visible() {
            let left = self
                .visible
                .remaining(ctx.now)
                .map_or(0, |remaining| remaining.as_secs() + 1);
            lines.push(Line::from(vec![
                Span::styled(
                    " Task completed successfully! ",
                    ctx.theme.highlight().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  x dismiss ({left}s)"), ctx.theme.text_dim()),
            ]));
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.visible
                    .schedule(fx.now(), Duration::from_millis(SNACKBAR_MS));
            }
            KeyCode::Char('x') if self.is_visible() => self.visible.cancel(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        self.visible.fire(fx.now());
    }

    fn hints(&self) -> &'static str {
        "Enter show  x dismiss"
    }
}

const TOAST_BUTTONS: [(&str, ToastLevel, &str); 4] = [
    ("Success", ToastLevel::Success, "Success!"),
    ("Error", ToastLevel::Error, "Something went wrong!"),
    ("Info", ToastLevel::Info, "Here is some info."),
    ("Warning", ToastLevel::Warning, "Be careful!"),
];

/// `(level, message)` emitted one second apart by "Show all".
const STAGGERED: [(ToastLevel, &str); 4] = [
    (ToastLevel::Success, "Processed successfully!"),
    (ToastLevel::Error, "An error occurred. Please try again."),
    (ToastLevel::Info, "A new update is available."),
    (ToastLevel::Warning, "You have unsaved changes."),
];

#[derive(Debug, Default)]
pub struct ToastDemoSection {
    cursor: usize,
    queued: Schedule<(ToastLevel, &'static str)>,
}

impl ToastDemoSection {
    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    fn show_all(&mut self, fx: &mut Effects) {
        self.queued.clear();
        for (step, toast) in STAGGERED.iter().enumerate() {
            let after = Duration::from_millis(TOAST_STAGGER_MS * step as u64);
            self.queued.push_after(fx.now(), after, *toast);
        }
        self.release(fx);
    }

    fn release(&mut self, fx: &mut Effects) {
        for (level, message) in self.queued.drain_due(fx.now()) {
            fx.notify(level, message);
        }
    }
}

impl Section for ToastDemoSection {
    fn title(&self) -> &'static str {
        "Toast notifications"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut spans = Vec::new();
        for (index, (label, _, _)) in TOAST_BUTTONS.iter().enumerate() {
            spans.push(button(label, ctx.focused && index == self.cursor, ctx.theme));
            spans.push(Span::raw(" "));
        }
        spans.push(button(
            "Show all",
            ctx.focused && self.cursor == TOAST_BUTTONS.len(),
            ctx.theme,
        ));
        let mut lines = vec![Line::from(spans), Line::default()];
        if !self.queued.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("{} more on the way…", self.queued.len()),
                ctx.theme.text_dim(),
            )));
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(TOAST_BUTTONS.len()),
            KeyCode::Enter | KeyCode::Char(' ') => match TOAST_BUTTONS.get(self.cursor) {
                Some((_, level, message)) => fx.notify(*level, *message),
                None => self.show_all(fx),
            },
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        self.release(fx);
    }

    fn hints(&self) -> &'static str {
        "←/→ button  Enter show"
    }
}

const TOOLTIPS: [(&str, &str); 4] = [
    ("?", "Click for help"),
    ("⚙", "Opens the settings page"),
    ("⇩", "Downloads the file"),
    ("☺", "Manage your profile and account settings"),
];

/// Icon row whose hovered entry shows a tooltip line.
#[derive(Debug, Default)]
pub struct TooltipSection {
    cursor: usize,
}

impl Section for TooltipSection {
    fn title(&self) -> &'static str {
        "Tooltips"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut icons = Vec::new();
        for (index, (icon, _)) in TOOLTIPS.iter().enumerate() {
            icons.push(button(icon, ctx.focused && index == self.cursor, ctx.theme));
            icons.push(Span::raw(" "));
        }
        let tip = if ctx.focused {
            Line::from(Span::styled(
                format!(" {} ", TOOLTIPS[self.cursor].1),
                ctx.theme.highlight(),
            ))
        } else {
            Line::from(Span::styled("Focus to see the tooltip", ctx.theme.disabled()))
        };
        write_lines(inner, buf, &[Line::from(icons), Line::default(), tip]);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(TOOLTIPS.len() - 1),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "←/→ icon"
    }
}
