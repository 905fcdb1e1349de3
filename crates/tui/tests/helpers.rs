//! Test helpers for driving the showcase shell.
//!
//! Provides key constructors and a harness that owns an `App`, its hub
//! channel and a `TestBackend` terminal, with a controllable clock.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use showcase_config::{ConfigLoader, ShowcaseConfig};
use tokio::sync::mpsc::{Receiver, channel};
use ui_showcase::{Action, App, EventHub};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a key event without modifiers.
pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Create an Alt+code key event.
pub fn alt(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

pub fn config(start: Option<&str>) -> ShowcaseConfig {
    let mut loader = ConfigLoader::new();
    if let Some(start) = start {
        loader = loader.with_start_fragment(start.to_string());
    }
    loader.build().expect("default config is valid")
}

pub struct TuiHarness {
    pub app: App,
    pub hub: EventHub,
    pub rx: Receiver<Action>,
    pub terminal: Terminal<TestBackend>,
    pub now: Instant,
}

impl TuiHarness {
    /// Mounted shell starting at `start`, sized `width` x `height`.
    pub fn new(start: Option<&str>, width: u16, height: u16) -> Self {
        let now = Instant::now();
        let hub = EventHub::new();
        let mut app = App::new_at(&config(start), hub.clone(), now);
        let (tx, rx) = channel(128);
        app.mount(tx);
        app.update_at(Action::Resize(width, height), now);
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create terminal");
        Self {
            app,
            hub,
            rx,
            terminal,
            now,
        }
    }

    /// Apply `action` and then every event the hub delivered because of it.
    pub fn send(&mut self, action: Action) {
        self.app.update_at(action, self.now);
        while let Ok(next) = self.rx.try_recv() {
            self.app.update_at(next, self.now);
        }
    }

    pub fn press(&mut self, key: KeyEvent) {
        self.send(Action::Input(key));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(key(c));
        }
    }

    pub fn click(&mut self, column: u16, row: u16) {
        self.send(Action::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Move the clock forward in UI-tick sized steps.
    pub fn advance(&mut self, total: Duration) {
        let step = Duration::from_millis(50);
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            let delta = step.min(total - elapsed);
            self.now += delta;
            elapsed += delta;
            self.send(Action::Tick);
        }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        let now = self.now;
        let app = &mut self.app;
        self.terminal
            .draw(|f| app.render_at(f, now))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    /// Render after the entry transition has finished.
    pub fn render_settled(&mut self) -> String {
        self.advance(Duration::from_millis(350));
        self.render()
    }
}

/// Convert a ratatui Buffer to a string for assertions.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}

/// The rendered row `y`.
pub fn row(screen: &str, y: usize) -> &str {
    screen.lines().nth(y).unwrap_or("")
}
