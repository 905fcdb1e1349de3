//! Shell shortcuts and global keybindings.
//!
//! Responsibilities:
//! - Define modifier shortcuts, shell actions and scrolling keys.
//!
//! Non-responsibilities:
//! - Handling input resolution or application state updates.
//!
//! Invariants:
//! - Shortcut bindings come first so Escape and modifier chords win over
//!   everything else.

use crossterm::event::{KeyCode, KeyModifiers};
use showcase_config::constants::SCROLL_STEP_ROWS;

use crate::action::Action;
use crate::route::PageId;

use super::super::{BindingScope, Group, Keybinding, Matcher};

const STEP: i32 = SCROLL_STEP_ROWS as i32;

fn scroll(keys: &'static str, description: &'static str, matcher: Matcher, action: Action) -> Keybinding {
    Keybinding {
        group: Group::Scrolling,
        keys,
        description,
        scope: BindingScope::Global,
        matcher: Some(matcher),
        action: Some(action),
        handles_input: true,
    }
}

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        // Shortcuts
        Keybinding {
            group: Group::Shortcuts,
            keys: "Ctrl+H",
            description: "Go to home",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Shortcut('h')),
            action: Some(Action::Navigate(PageId::Home)),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shortcuts,
            keys: "Ctrl+/",
            description: "Toggle menu",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Shortcut('/')),
            action: Some(Action::ToggleMenu),
            handles_input: true,
        },
        // Legacy terminals report Ctrl+/ as Ctrl+7.
        Keybinding {
            group: Group::Shortcuts,
            keys: "Ctrl+/",
            description: "Toggle menu",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('7'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::ToggleMenu),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shortcuts,
            keys: "Ctrl+K",
            description: "Focus search (Basics)",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Shortcut('k')),
            action: Some(Action::FocusSearch),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shortcuts,
            keys: "Ctrl+C",
            description: "Quit",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shortcuts,
            keys: "Esc",
            description: "Close menu / leave section",
            scope: BindingScope::Global,
            matcher: Some(Matcher::AnyModifiers(KeyCode::Esc)),
            action: Some(Action::CloseMenu),
            handles_input: true,
        },
        // Shell
        Keybinding {
            group: Group::Shell,
            keys: "?",
            description: "Help",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char('?')),
            action: Some(Action::ToggleHelp),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "q",
            description: "Quit",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char('q')),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "Tab",
            description: "Focus next section",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::FocusNext),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "Shift+Tab",
            description: "Focus previous section",
            scope: BindingScope::Global,
            matcher: Some(Matcher::AnyModifiers(KeyCode::BackTab)),
            action: Some(Action::FocusPrevious),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "m",
            description: "Toggle menu",
            scope: BindingScope::ContentPage,
            matcher: Some(Matcher::Char('m')),
            action: Some(Action::ToggleMenu),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "b",
            description: "Back to home",
            scope: BindingScope::ContentPage,
            matcher: Some(Matcher::Char('b')),
            action: Some(Action::Navigate(PageId::Home)),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "Backspace",
            description: "Back to home",
            scope: BindingScope::ContentPage,
            matcher: Some(Matcher::Key {
                code: KeyCode::Backspace,
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::Navigate(PageId::Home)),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "s",
            description: "Copy share link",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char('s')),
            action: Some(Action::Share),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: "t",
            description: "Cycle color theme",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char('t')),
            action: Some(Action::CycleTheme),
            handles_input: true,
        },
        Keybinding {
            group: Group::Shell,
            keys: ":",
            description: "Edit location fragment",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char(':')),
            action: Some(Action::OpenLocationPrompt),
            handles_input: true,
        },
        // Scrolling
        scroll("↑/k", "Scroll up", Matcher::AnyModifiers(KeyCode::Up), Action::ScrollBy(-STEP)),
        scroll("↑/k", "Scroll up", Matcher::Char('k'), Action::ScrollBy(-STEP)),
        scroll("↓/j", "Scroll down", Matcher::AnyModifiers(KeyCode::Down), Action::ScrollBy(STEP)),
        scroll("↓/j", "Scroll down", Matcher::Char('j'), Action::ScrollBy(STEP)),
        scroll("PgUp", "Page up", Matcher::AnyModifiers(KeyCode::PageUp), Action::ScrollPage(-1)),
        scroll("PgDn/Space", "Page down", Matcher::AnyModifiers(KeyCode::PageDown), Action::ScrollPage(1)),
        scroll("PgDn/Space", "Page down", Matcher::Char(' '), Action::ScrollPage(1)),
        scroll("Home/g", "Scroll to top", Matcher::AnyModifiers(KeyCode::Home), Action::ScrollToTop),
        scroll("Home/g", "Scroll to top", Matcher::Char('g'), Action::ScrollToTop),
        scroll("End/G", "Scroll to bottom", Matcher::AnyModifiers(KeyCode::End), Action::ScrollToBottom),
        scroll("End/G", "Scroll to bottom", Matcher::Char('G'), Action::ScrollToBottom),
    ]
}
