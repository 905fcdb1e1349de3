//! Special features: infinite list, media player, slideshow, virtual
//! keyboard and popup.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};
use showcase_config::constants::{INFINITE_LOAD_MS, SLIDESHOW_MS};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::runtime::timer::{Delay, Interval};
use crate::ui::popup::centered_rect;
use crate::ui::theme::{ThemeExt, helpers, spinner_char};

use super::common::{button, marker, progress_bar, render_card, row_style, write_lines};

const INITIAL_ITEMS: usize = 20;
const PAGE_SIZE: usize = 10;
const MAX_ITEMS: usize = 100;
const VISIBLE_ROWS: usize = 6;

/// List that fetches more rows when the cursor reaches the bottom.
#[derive(Debug)]
pub struct InfiniteListSection {
    len: usize,
    cursor: usize,
    loading: Delay,
}

impl Default for InfiniteListSection {
    fn default() -> Self {
        Self {
            len: INITIAL_ITEMS,
            cursor: 0,
            loading: Delay::new(),
        }
    }
}

impl InfiniteListSection {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_pending()
    }

    pub fn has_more(&self) -> bool {
        self.len < MAX_ITEMS
    }

    fn maybe_load(&mut self, fx: &Effects) {
        if self.cursor + 1 >= self.len && self.has_more() && !self.is_loading() {
            self.loading
                .schedule(fx.now(), Duration::from_millis(INFINITE_LOAD_MS));
        }
    }
}

impl Section for InfiniteListSection {
    fn title(&self) -> &'static str {
        "Infinite scroll"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + VISIBLE_ROWS as u16 + 2
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let first = self.cursor.saturating_sub(VISIBLE_ROWS - 1);
        let mut lines: Vec<Line> = (first..self.len.min(first + VISIBLE_ROWS))
            .map(|index| {
                let selected = index == self.cursor;
                let number = index + 1;
                Line::from(vec![
                    Span::raw(marker(selected, ctx.focused)),
                    Span::styled(format!("Item {number}"), row_style(selected, ctx.focused, ctx.theme)),
                    Span::styled(
                        format!("  Description of item {number}."),
                        ctx.theme.text_dim(),
                    ),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(if self.is_loading() {
            let remaining = self.loading.remaining(ctx.now).unwrap_or_default();
            let frame = remaining.as_millis() as u64 / 80;
            Line::from(Span::styled(
                format!("{} Loading more…", spinner_char(frame)),
                ctx.theme.info(),
            ))
        } else if self.has_more() {
            Line::from(Span::styled(
                format!("{} of {MAX_ITEMS} loaded", self.len),
                ctx.theme.text_dim(),
            ))
        } else {
            Line::from(Span::styled("Everything is loaded.", ctx.theme.success()))
        });
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(self.len - 1);
                self.maybe_load(fx);
            }
            KeyCode::End => {
                self.cursor = self.len - 1;
                self.maybe_load(fx);
            }
            KeyCode::Home => self.cursor = 0,
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.loading.fire(fx.now()) {
            self.len = (self.len + PAGE_SIZE).min(MAX_ITEMS);
            tracing::debug!(items = self.len, "infinite list extended");
        }
    }

    fn hints(&self) -> &'static str {
        "↑/↓ browse  End load more"
    }
}

const TRACK_SECONDS: u32 = 596;
const SEEK_STEP: u32 = 10;

/// Playback controls over a simulated track.
#[derive(Debug)]
pub struct MediaPlayerSection {
    position: u32,
    playing: bool,
    muted: bool,
    clock: Interval,
}

impl Default for MediaPlayerSection {
    fn default() -> Self {
        Self {
            position: 0,
            playing: false,
            muted: false,
            clock: Interval::new(Duration::from_secs(1)),
        }
    }
}

/// `m:ss`.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl MediaPlayerSection {
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn seek(&mut self, seconds: u32) {
        self.position = seconds.min(TRACK_SECONDS);
    }
}

impl Section for MediaPlayerSection {
    fn title(&self) -> &'static str {
        "Media player"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 4
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let percent = (self.position * 100 / TRACK_SECONDS) as u16;
        let lines = [
            Line::from(vec![
                Span::styled("♫ ", ctx.theme.info()),
                Span::styled("Big Buck Bunny", ctx.theme.text().add_modifier(Modifier::BOLD)),
            ]),
            progress_bar(percent, inner.width.min(60), ctx.theme),
            Line::from(vec![
                button(if self.playing { "❚❚ Pause" } else { "▶ Play" }, ctx.focused, ctx.theme),
                Span::raw(" "),
                button(if self.muted { "Unmute" } else { "Mute" }, false, ctx.theme),
                Span::styled(
                    format!(
                        "  {} / {}",
                        format_time(self.position),
                        format_time(TRACK_SECONDS)
                    ),
                    ctx.theme.text_dim(),
                ),
            ]),
        ];
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => {
                self.playing = !self.playing;
                if self.playing {
                    if self.position >= TRACK_SECONDS {
                        self.position = 0;
                    }
                    self.clock.start(fx.now());
                } else {
                    self.clock.stop();
                }
            }
            KeyCode::Char('m') => self.muted = !self.muted,
            KeyCode::Left => self.seek(self.position.saturating_sub(SEEK_STEP)),
            KeyCode::Right => self.seek(self.position + SEEK_STEP),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.clock.poll(fx.now()) {
            self.position = (self.position + 1).min(TRACK_SECONDS);
            if self.position == TRACK_SECONDS {
                self.playing = false;
                self.clock.stop();
            }
        }
    }

    fn hints(&self) -> &'static str {
        "Space play/pause  m mute  ←/→ seek"
    }
}

const SLIDES: [(&str, &str); 4] = [
    ("Modern workspace", "A calm desk setup with the latest gear."),
    ("Team collaboration", "People working through ideas together."),
    ("Business analytics", "Dashboards that tell the story at a glance."),
    ("Product gallery", "A curated look at featured products."),
];

/// Slides that advance on their own until paused.
#[derive(Debug)]
pub struct SlideshowSection {
    current: usize,
    autoplay: Interval,
}

impl SlideshowSection {
    pub fn new(now: std::time::Instant) -> Self {
        Self {
            current: 0,
            autoplay: Interval::started(Duration::from_millis(SLIDESHOW_MS), now),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    fn go(&mut self, index: usize, fx: &Effects) {
        self.current = index % SLIDES.len();
        if self.autoplay.is_running() {
            self.autoplay.start(fx.now());
        }
    }
}

impl Section for SlideshowSection {
    fn title(&self) -> &'static str {
        "Slideshow"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 5
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let (title, caption) = SLIDES[self.current];
        let dots: Vec<Span> = (0..SLIDES.len())
            .map(|index| {
                if index == self.current {
                    Span::styled("● ", Style::default().fg(ctx.theme.accent))
                } else {
                    Span::styled("○ ", ctx.theme.disabled())
                }
            })
            .collect();
        let lines = [
            Line::from(vec![
                Span::styled("‹  ", ctx.theme.text_dim()),
                Span::styled(title, ctx.theme.title()),
                Span::styled("  ›", ctx.theme.text_dim()),
            ])
            .centered(),
            Line::from(Span::styled(caption, ctx.theme.text())).centered(),
            Line::default(),
            Line::from(dots).centered(),
            Line::from(Span::styled(
                if self.is_autoplaying() { "autoplay on" } else { "autoplay off" },
                ctx.theme.text_dim(),
            ))
            .centered(),
        ];
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left => self.go(self.current + SLIDES.len() - 1, fx),
            KeyCode::Right => self.go(self.current + 1, fx),
            KeyCode::Char(' ') | KeyCode::Char('p') => {
                if self.autoplay.is_running() {
                    self.autoplay.stop();
                } else {
                    self.autoplay.start(fx.now());
                }
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.autoplay.poll(fx.now()) {
            self.current = (self.current + 1) % SLIDES.len();
        }
    }

    fn hints(&self) -> &'static str {
        "←/→ slide  Space autoplay"
    }
}

const KEY_ROWS: [&[&str]; 5] = [
    &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"],
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["Z", "X", "C", "V", "B", "N", "M"],
    &["Space", "Backspace"],
];

/// On-screen keyboard navigated with the arrows.
#[derive(Debug, Default)]
pub struct VirtualKeyboardSection {
    value: String,
    row: usize,
    column: usize,
}

impl VirtualKeyboardSection {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn press(&mut self, key: &str) {
        match key {
            "Backspace" => {
                self.value.pop();
            }
            "Space" => self.value.push(' '),
            other => self.value.push_str(other),
        }
    }

    fn clamp_column(&mut self) {
        self.column = self.column.min(KEY_ROWS[self.row].len() - 1);
    }
}

impl Section for VirtualKeyboardSection {
    fn title(&self) -> &'static str {
        "Virtual keyboard"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 2 + KEY_ROWS.len() as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let shown = if self.value.is_empty() {
            Span::styled("Type with the keys below", ctx.theme.disabled())
        } else {
            Span::styled(self.value.as_str(), ctx.theme.text())
        };
        let mut lines = vec![
            Line::from(vec![Span::styled("> ", ctx.theme.text_dim()), shown]),
            Line::default(),
        ];
        for (row_index, row) in KEY_ROWS.iter().enumerate() {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(column_index, label)| {
                    let selected =
                        ctx.focused && row_index == self.row && column_index == self.column;
                    let style = if selected {
                        helpers::selected_style(ctx.theme)
                    } else {
                        ctx.theme.border()
                    };
                    [Span::styled(format!("[{label}]"), style), Span::raw(" ")]
                })
                .collect();
            lines.push(Line::from(spans).centered());
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Up => {
                self.row = self.row.saturating_sub(1);
                self.clamp_column();
            }
            KeyCode::Down => {
                self.row = (self.row + 1).min(KEY_ROWS.len() - 1);
                self.clamp_column();
            }
            KeyCode::Left => self.column = self.column.saturating_sub(1),
            KeyCode::Right => {
                self.column += 1;
                self.clamp_column();
            }
            KeyCode::Enter => self.press(KEY_ROWS[self.row][self.column]),
            KeyCode::Char('x') => self.value.clear(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "arrows key  Enter press  x clear"
    }
}

/// Button that opens a small modal with a confirm action.
#[derive(Debug, Default)]
pub struct PopupSection {
    open: bool,
    confirm_selected: bool,
}

impl PopupSection {
    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Section for PopupSection {
    fn title(&self) -> &'static str {
        "Popup"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 8
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        write_lines(
            inner,
            buf,
            &[
                Line::from(button("Open popup", ctx.focused && !self.open, ctx.theme)),
                Line::from(Span::styled(
                    "Esc closes the popup.",
                    ctx.theme.text_dim(),
                )),
            ],
        );
        if !self.open {
            return;
        }
        let below_button = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        let popup = centered_rect(48, 5, below_button);
        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(ctx.theme.border_focused())
            .title(" Custom popup ");
        let body = block.inner(popup);
        block.render(popup, buf);
        write_lines(
            body,
            buf,
            &[
                Line::from(Span::styled(
                    "This popup appears over the page content.",
                    ctx.theme.text(),
                )),
                Line::default(),
                Line::from(vec![
                    button("Cancel", !self.confirm_selected, ctx.theme),
                    Span::raw(" "),
                    button("Run", self.confirm_selected, ctx.theme),
                ]),
            ],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        if !self.open {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.open = true;
                    self.confirm_selected = true;
                    KeyOutcome::Consumed
                }
                _ => KeyOutcome::Ignored,
            };
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                self.confirm_selected = !self.confirm_selected;
            }
            KeyCode::Enter => {
                if self.confirm_selected {
                    fx.success("Action completed from the popup!");
                }
                self.open = false;
            }
            KeyCode::Esc => self.open = false,
            _ => {}
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        if self.open {
            "←/→ button  Enter choose  Esc close"
        } else {
            "Enter open"
        }
    }

    fn blur(&mut self) {
        self.open = false;
    }
}
