//! History, page jump and menu keybindings.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;
use crate::route::PageId;

use super::super::{BindingScope, Group, Keybinding, Matcher};

fn jump(keys: &'static str, description: &'static str, digit: char, page: PageId) -> Keybinding {
    Keybinding {
        group: Group::Navigation,
        keys,
        description,
        scope: BindingScope::Global,
        matcher: Some(Matcher::Char(digit)),
        action: Some(Action::Navigate(page)),
        handles_input: true,
    }
}

/// Rendered in help only; the menu consumes these keys while open.
fn menu_doc(keys: &'static str, description: &'static str) -> Keybinding {
    Keybinding {
        group: Group::Menu,
        keys,
        description,
        scope: BindingScope::ContentPage,
        matcher: None,
        action: None,
        handles_input: false,
    }
}

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        Keybinding {
            group: Group::Navigation,
            keys: "Alt+←/[",
            description: "History back",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Left,
                modifiers: KeyModifiers::ALT,
            }),
            action: Some(Action::HistoryBack),
            handles_input: true,
        },
        Keybinding {
            group: Group::Navigation,
            keys: "Alt+←/[",
            description: "History back",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char('[')),
            action: Some(Action::HistoryBack),
            handles_input: true,
        },
        Keybinding {
            group: Group::Navigation,
            keys: "Alt+→/]",
            description: "History forward",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Key {
                code: KeyCode::Right,
                modifiers: KeyModifiers::ALT,
            }),
            action: Some(Action::HistoryForward),
            handles_input: true,
        },
        Keybinding {
            group: Group::Navigation,
            keys: "Alt+→/]",
            description: "History forward",
            scope: BindingScope::Global,
            matcher: Some(Matcher::Char(']')),
            action: Some(Action::HistoryForward),
            handles_input: true,
        },
        jump("1", "Go to home", '1', PageId::Home),
        jump("2", "Go to basics", '2', PageId::Basics),
        jump("3", "Go to forms", '3', PageId::Forms),
        jump("4", "Go to interactions", '4', PageId::Interactions),
        menu_doc("↑/↓", "Move menu cursor"),
        menu_doc("Enter", "Open highlighted page"),
        menu_doc("Click outside", "Close menu"),
    ]
}
