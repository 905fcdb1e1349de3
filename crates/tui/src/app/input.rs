//! Keyboard and mouse routing for the shell.
//!
//! Responsibilities:
//! - Decide who gets a key: location prompt, help overlay, shell shortcuts,
//!   the menu overlay, the focused section, then the keymap.
//! - Hit-test clicks against `ShellLayout` and map the wheel to scrolling.
//!
//! Invariants:
//! - Escape always closes the menu overlay when it is open, whatever modifiers are held.
//! - A section in text-entry mode receives printable keys before the keymap.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::{App, ShellLayout, WHEEL_ROWS};
use crate::action::Action;
use crate::input::keymap::{resolve_action, resolve_shortcut};
use crate::pages::{Effects, KeyOutcome};
use crate::route::PageId;

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if self.location_prompt.is_some() {
            self.handle_prompt_key(key, now);
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        let page = self.nav.current_page;
        if let Some(action) = resolve_shortcut(page, key) {
            if action == Action::CloseMenu
                && !self.nav.mobile_menu_open
                && self.view.focused().is_some()
            {
                // Escape backs out of the focused section before leaving it.
                if !self.offer_to_section(key, now) {
                    self.update_at(Action::ClearFocus, now);
                }
                return;
            }
            self.update_at(action, now);
            return;
        }

        if self.nav.mobile_menu_open {
            let action = match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(Action::MenuCursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Action::MenuCursorDown),
                KeyCode::Enter => Some(Action::MenuSelect),
                _ => resolve_action(page, key)
                    .filter(|action| matches!(action, Action::ToggleMenu | Action::Quit)),
            };
            if let Some(action) = action {
                self.update_at(action, now);
            }
            return;
        }

        if self.offer_to_section(key, now) {
            return;
        }

        if let Some(action) = resolve_action(page, key) {
            self.update_at(action, now);
        }
    }

    /// Give `key` to the focused section. Returns whether it was used.
    fn offer_to_section(&mut self, key: KeyEvent, now: Instant) -> bool {
        let mut fx = Effects::new(now);
        if self.view.handle_key(key, &mut fx) == KeyOutcome::Ignored {
            return false;
        }
        self.apply_effects(fx, now);
        // Sections can grow or shrink when their state changes.
        self.scroll.clamp(self.max_scroll());
        true
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => self.location_prompt = None,
            KeyCode::Enter => {
                if let Some(prompt) = self.location_prompt.take() {
                    self.update_at(Action::EditLocation(prompt.value().to_string()), now);
                }
            }
            _ => {
                if let Some(prompt) = self.location_prompt.as_mut() {
                    prompt.handle_key(key);
                }
            }
        }
    }

    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.location_prompt.is_some() || self.show_help {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown if !self.nav.mobile_menu_open => {
                self.update_at(Action::ScrollBy(WHEEL_ROWS), now);
            }
            MouseEventKind::ScrollUp if !self.nav.mobile_menu_open => {
                self.update_at(Action::ScrollBy(-WHEEL_ROWS), now);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = self.layout();
                self.handle_click(Position::new(mouse.column, mouse.row), &layout, now);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, pos: Position, layout: &ShellLayout, now: Instant) {
        if let Some(overlay) = layout.overlay {
            let action = if layout.menu_button.contains(pos) {
                Some(Action::ToggleMenu)
            } else if overlay.contains(pos) {
                layout.overlay_entry_at(pos).map(Action::Navigate)
            } else {
                Some(Action::CloseMenu)
            };
            if let Some(action) = action {
                self.update_at(action, now);
            }
            return;
        }

        let action = if layout.menu_button.contains(pos) {
            Some(Action::ToggleMenu)
        } else if layout.back_button.is_some_and(|back| back.contains(pos)) {
            Some(Action::Navigate(PageId::Home))
        } else if layout.share_button.contains(pos) {
            Some(Action::Share)
        } else if layout.scroll_top_button.is_some_and(|top| top.contains(pos)) {
            Some(Action::ScrollToTop)
        } else {
            layout.sidebar_entry_at(pos).map(Action::Navigate)
        };
        if let Some(action) = action {
            self.update_at(action, now);
            return;
        }

        if layout.body.contains(pos) && pos.x < layout.body.x + layout.content_width() {
            let row = (pos.y - layout.body.y).saturating_add(self.scroll.offset());
            if !self.view.focus_at(row, layout.content_width()) {
                self.view.clear_focus();
            }
        }
    }
}
