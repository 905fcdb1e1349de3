//! Interaction demos: reordering, double activation, swipe gestures and
//! context menus, mapped onto keys.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::runtime::timer::Delay;
use crate::ui::ToastLevel;
use crate::ui::theme::{ThemeExt, helpers};

use super::common::{button, marker, render_card, row_style, write_lines};

/// Two activations closer together than this count as one double activation.
const DOUBLE_ACTIVATION_WINDOW: Duration = Duration::from_millis(400);

/// How long a recognized swipe direction stays on screen.
const GESTURE_DISPLAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
}

const TASKS: [Task; 4] = [
    Task {
        id: 1,
        title: "Task 1",
        description: "The first task",
    },
    Task {
        id: 2,
        title: "Task 2",
        description: "The second task",
    },
    Task {
        id: 3,
        title: "Task 3",
        description: "The third task",
    },
    Task {
        id: 4,
        title: "Task 4",
        description: "The fourth task",
    },
];

/// List whose rows can be picked up and moved.
#[derive(Debug)]
pub struct ReorderSection {
    tasks: Vec<Task>,
    cursor: usize,
    grabbed: bool,
}

impl Default for ReorderSection {
    fn default() -> Self {
        Self {
            tasks: TASKS.to_vec(),
            cursor: 0,
            grabbed: false,
        }
    }
}

impl ReorderSection {
    pub fn order(&self) -> Vec<u8> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    /// Move the row at `from` so it lands at `to`.
    pub fn move_task(&mut self, from: usize, to: usize) {
        if from >= self.tasks.len() || to >= self.tasks.len() || from == to {
            return;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
    }

    fn step(&mut self, down: bool) {
        let target = if down {
            (self.cursor + 1).min(self.tasks.len() - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
        if self.grabbed {
            self.move_task(self.cursor, target);
        }
        self.cursor = target;
    }
}

impl Section for ReorderSection {
    fn title(&self) -> &'static str {
        "Drag and drop"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + self.tasks.len() as u16 + 2
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = Vec::new();
        for (index, task) in self.tasks.iter().enumerate() {
            let selected = index == self.cursor;
            let handle = if selected && self.grabbed { "⇕ " } else { "⋮ " };
            let mut style = row_style(selected, ctx.focused, ctx.theme);
            if selected && self.grabbed {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::raw(marker(selected, ctx.focused)),
                Span::styled(handle, ctx.theme.text_dim()),
                Span::styled(task.title, style),
                Span::styled(format!("  {}", task.description), ctx.theme.text_dim()),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            if self.grabbed {
                "Moving: ↑/↓ to place, Space to drop"
            } else {
                "Space picks a row up"
            },
            ctx.theme.text_dim(),
        )));
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Up if shifted => {
                self.grabbed = true;
                self.step(false);
                self.grabbed = false;
            }
            KeyCode::Down if shifted => {
                self.grabbed = true;
                self.step(true);
                self.grabbed = false;
            }
            KeyCode::Up => self.step(false),
            KeyCode::Down => self.step(true),
            KeyCode::Char(' ') | KeyCode::Enter => self.grabbed = !self.grabbed,
            KeyCode::Esc if self.grabbed => self.grabbed = false,
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "Space grab/drop  ↑/↓ move  Shift+↑/↓ nudge"
    }

    fn blur(&mut self) {
        self.grabbed = false;
    }
}

/// Targets that respond to a second activation in quick succession.
#[derive(Debug, Default)]
pub struct DoubleActivationSection {
    cursor: usize,
    count: u32,
    last: Option<(usize, Instant)>,
}

const DOUBLE_TARGETS: [(&str, Option<&str>); 3] = [
    ("Counter", None),
    ("♥ Like", Some("Liked!")),
    ("★ Favorite", Some("Added to favorites!")),
];

impl DoubleActivationSection {
    pub fn count(&self) -> u32 {
        self.count
    }

    fn activate(&mut self, fx: &mut Effects) {
        let now = fx.now();
        let double = matches!(
            self.last,
            Some((target, at)) if target == self.cursor
                && now.saturating_duration_since(at) <= DOUBLE_ACTIVATION_WINDOW
        );
        if !double {
            self.last = Some((self.cursor, now));
            return;
        }
        self.last = None;
        match DOUBLE_TARGETS[self.cursor].1 {
            None => {
                self.count += 1;
                fx.info(format!("Double activation #{}!", self.count));
            }
            Some(message) => fx.success(message),
        }
    }
}

impl Section for DoubleActivationSection {
    fn title(&self) -> &'static str {
        "Double activation"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut spans = Vec::new();
        for (index, (label, _)) in DOUBLE_TARGETS.iter().enumerate() {
            spans.push(button(label, ctx.focused && index == self.cursor, ctx.theme));
            spans.push(Span::raw(" "));
        }
        let lines = [
            Line::from(spans),
            Line::default(),
            Line::from(vec![
                Span::styled("Double activations: ", ctx.theme.text_dim()),
                Span::styled(self.count.to_string(), ctx.theme.title()),
                Span::styled("  (press Enter twice quickly)", ctx.theme.disabled()),
            ]),
        ];
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(DOUBLE_TARGETS.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(fx),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "←/→ target  Enter Enter activate"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            Self::Left => "←",
            Self::Right => "→",
            Self::Up => "↑",
            Self::Down => "↓",
        }
    }
}

/// Swipe pad: arrow or vim keys stand in for touch swipes.
#[derive(Debug, Default)]
pub struct GestureSection {
    direction: Option<Direction>,
    display: Delay,
}

impl GestureSection {
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

impl Section for GestureSection {
    fn title(&self) -> &'static str {
        "Swipe gestures"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let shown = match self.direction {
            Some(direction) => Span::styled(
                format!("{} swiped {}", direction.arrow(), direction.label()),
                ctx.theme.title(),
            ),
            None => Span::styled("Swipe with the arrow keys", ctx.theme.text_dim()),
        };
        let inner = render_card(area, buf, self.title(), ctx);
        write_lines(
            inner,
            buf,
            &[
                Line::from(shown).centered(),
                Line::default(),
                Line::from(Span::styled("h j k l also work", ctx.theme.disabled())).centered(),
            ],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        let direction = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Direction::Left,
            KeyCode::Right | KeyCode::Char('l') => Direction::Right,
            KeyCode::Up | KeyCode::Char('k') => Direction::Up,
            KeyCode::Down | KeyCode::Char('j') => Direction::Down,
            _ => return KeyOutcome::Ignored,
        };
        self.direction = Some(direction);
        self.display.schedule(fx.now(), GESTURE_DISPLAY);
        fx.info(format!("Swiped {}!", direction.label()));
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.display.fire(fx.now()) {
            self.direction = None;
        }
    }

    fn hints(&self) -> &'static str {
        "arrows swipe"
    }
}

type MenuEntry = (&'static str, ToastLevel, &'static str);

const CONTEXT_TARGETS: [(&str, &[MenuEntry]); 3] = [
    (
        "Text editor",
        &[
            ("Copy", ToastLevel::Info, "Copied"),
            ("Cut", ToastLevel::Info, "Cut"),
            ("Paste", ToastLevel::Info, "Pasted"),
            ("Delete", ToastLevel::Warning, "Deleted"),
        ],
    ),
    (
        "File manager",
        &[
            ("Share", ToastLevel::Info, "Share link created"),
            ("Download", ToastLevel::Info, "Download started"),
            ("Archive", ToastLevel::Info, "Moved to archive"),
            ("Move to trash", ToastLevel::Warning, "Moved to trash"),
        ],
    ),
    (
        "Image viewer",
        &[
            ("Zoom in", ToastLevel::Info, "Zoomed in"),
            ("Rotate 90°", ToastLevel::Info, "Rotated 90°"),
            ("Refresh", ToastLevel::Info, "Refreshed"),
        ],
    ),
];

/// Targets that open a menu of actions, like a right-click.
#[derive(Debug, Default)]
pub struct ContextMenuSection {
    target: usize,
    /// Highlighted entry while the menu is open.
    open: Option<usize>,
}

impl ContextMenuSection {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

impl Section for ContextMenuSection {
    fn title(&self) -> &'static str {
        "Context menu"
    }

    fn height(&self, _width: u16) -> u16 {
        let longest = CONTEXT_TARGETS
            .iter()
            .map(|(_, entries)| entries.len())
            .max()
            .unwrap_or(0);
        2 + 2 + longest as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut spans = Vec::new();
        for (index, (label, _)) in CONTEXT_TARGETS.iter().enumerate() {
            spans.push(button(label, ctx.focused && index == self.target, ctx.theme));
            spans.push(Span::raw(" "));
        }
        let mut lines = vec![Line::from(spans), Line::default()];
        match self.open {
            Some(highlight) => {
                for (index, (label, _, _)) in CONTEXT_TARGETS[self.target].1.iter().enumerate() {
                    let style = if index == highlight {
                        helpers::selected_style(ctx.theme)
                    } else {
                        ctx.theme.text()
                    };
                    lines.push(Line::from(vec![
                        Span::styled("  │ ", ctx.theme.border()),
                        Span::styled(format!("{label:<16}"), style),
                    ]));
                }
            }
            None => lines.push(Line::from(Span::styled(
                "Enter or m opens the menu",
                ctx.theme.text_dim(),
            ))),
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        let entries = CONTEXT_TARGETS[self.target].1;
        match (self.open, key.code) {
            (Some(highlight), KeyCode::Up) => self.open = Some(highlight.saturating_sub(1)),
            (Some(highlight), KeyCode::Down) => {
                self.open = Some((highlight + 1).min(entries.len() - 1));
            }
            (Some(highlight), KeyCode::Enter) => {
                let (_, level, message) = entries[highlight];
                fx.notify(level, message);
                self.open = None;
            }
            (Some(_), KeyCode::Esc) => self.open = None,
            (None, KeyCode::Left) => self.target = self.target.saturating_sub(1),
            (None, KeyCode::Right) => {
                self.target = (self.target + 1).min(CONTEXT_TARGETS.len() - 1);
            }
            (None, KeyCode::Enter | KeyCode::Char('m')) => self.open = Some(0),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        if self.is_open() {
            "↑/↓ item  Enter run  Esc close"
        } else {
            "←/→ target  Enter menu"
        }
    }

    fn blur(&mut self) {
        self.open = None;
    }
}
