//! Centralized keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for keybindings and their descriptions.
//! - Resolve KeyEvents into Actions without mutating App state.
//!
//! Non-responsibilities:
//! - Performing App state mutations or side effects.
//! - Handling text entry modes (those remain in the focused section).
//!
//! Invariants:
//! - Bindings are deterministic and stable for help rendering.
//! - Resolver never mutates App state and returns at most one Action.
//! - Modifier shortcuts fire only with Ctrl, Super or Meta held; Escape
//!   matches regardless of modifiers.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::route::PageId;

mod bindings;

/// Help overlay grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    Shortcuts,
    Shell,
    Scrolling,
    Navigation,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingScope {
    Global,
    /// Any page except home.
    ContentPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// A printable character, with or without Shift.
    Char(char),
    /// A character combined with Ctrl, Super or Meta.
    Shortcut(char),
    /// A key regardless of held modifiers.
    AnyModifiers(KeyCode),
}

impl Matcher {
    fn matches(self, key: KeyEvent) -> bool {
        match self {
            Matcher::Key { code, modifiers } => key.code == code && key.modifiers == modifiers,
            Matcher::Char(c) => {
                key.code == KeyCode::Char(c)
                    && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
            }
            Matcher::Shortcut(c) => {
                let command = KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META;
                key.modifiers.intersects(command)
                    && matches!(key.code, KeyCode::Char(got) if got.eq_ignore_ascii_case(&c))
            }
            Matcher::AnyModifiers(code) => key.code == code,
        }
    }
}

#[derive(Clone)]
pub(crate) struct Keybinding {
    pub(crate) group: Group,
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) scope: BindingScope,
    pub(crate) matcher: Option<Matcher>,
    pub(crate) action: Option<Action>,
    pub(crate) handles_input: bool,
}

impl Keybinding {
    fn matches(&self, key: KeyEvent, page: PageId) -> bool {
        if !self.scope_applies(page) {
            return false;
        }
        self.matcher.is_some_and(|matcher| matcher.matches(key))
    }

    pub(crate) fn scope_applies(&self, page: PageId) -> bool {
        match self.scope {
            BindingScope::Global => true,
            BindingScope::ContentPage => !page.is_home(),
        }
    }
}

pub(crate) fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

pub(crate) fn groups_in_order() -> &'static [Group] {
    &[
        Group::Shortcuts,
        Group::Shell,
        Group::Scrolling,
        Group::Navigation,
        Group::Menu,
    ]
}

fn resolve_in(page: PageId, key: KeyEvent, only: Option<Group>) -> Option<Action> {
    keybindings()
        .into_iter()
        .filter(|binding| binding.handles_input)
        .filter(|binding| only.is_none_or(|group| binding.group == group))
        .find(|binding| binding.matches(key, page))
        .and_then(|binding| binding.action)
}

/// Resolve modifier shortcuts and Escape, which take priority over the
/// focused section.
pub(crate) fn resolve_shortcut(page: PageId, key: KeyEvent) -> Option<Action> {
    resolve_in(page, key, Some(Group::Shortcuts))
}

pub(crate) fn resolve_action(page: PageId, key: KeyEvent) -> Option<Action> {
    resolve_in(page, key, None)
}
