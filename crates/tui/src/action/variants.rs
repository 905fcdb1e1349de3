//! Action enum definitions for the showcase event system.
//!
//! # Action Categories
//!
//! - **System**: lifecycle and environment (quit, tick, resize)
//! - **Input**: raw keyboard and mouse events forwarded by the input task
//! - **Navigation**: page changes, location edits, history traversal
//! - **Shell**: menu, scrolling, focus, share, help and theme
//! - **Notifications**: toast messages raised by widget sections

use crossterm::event::{KeyEvent, MouseEvent};

use crate::route::PageId;
use crate::ui::ToastLevel;

/// Unified action type consumed by `App::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // System
    Quit,
    Tick,
    Resize(u16, u16),

    // Input
    Input(KeyEvent),
    Mouse(MouseEvent),

    // Navigation
    /// Programmatic navigation: writes the fragment, sets the page, closes the menu.
    Navigate(PageId),
    /// The location fragment changed (payload is the fragment without `#`).
    HashChanged(String),
    /// Direct edit of the location, as typed into the location prompt.
    EditLocation(String),
    HistoryBack,
    HistoryForward,

    // Menu / sidebar
    /// Menu button: collapses the sidebar on wide viewports, toggles the overlay otherwise.
    ToggleMenu,
    CloseMenu,
    MenuCursorUp,
    MenuCursorDown,
    MenuSelect,

    // Scrolling
    ScrollBy(i32),
    ScrollPage(i32),
    ScrollToTop,
    ScrollToBottom,

    // Focus
    FocusNext,
    FocusPrevious,
    FocusSearch,
    ClearFocus,

    // Shell
    Share,
    ToggleHelp,
    OpenLocationPrompt,
    CycleTheme,

    // Notifications
    Notify(ToastLevel, String),
}

impl Action {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Tick => "tick",
            Self::Resize(..) => "resize",
            Self::Input(_) => "input",
            Self::Mouse(_) => "mouse",
            Self::Navigate(_) => "navigate",
            Self::HashChanged(_) => "hash_changed",
            Self::EditLocation(_) => "edit_location",
            Self::HistoryBack => "history_back",
            Self::HistoryForward => "history_forward",
            Self::ToggleMenu => "toggle_menu",
            Self::CloseMenu => "close_menu",
            Self::MenuCursorUp => "menu_cursor_up",
            Self::MenuCursorDown => "menu_cursor_down",
            Self::MenuSelect => "menu_select",
            Self::ScrollBy(_) => "scroll_by",
            Self::ScrollPage(_) => "scroll_page",
            Self::ScrollToTop => "scroll_to_top",
            Self::ScrollToBottom => "scroll_to_bottom",
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::FocusSearch => "focus_search",
            Self::ClearFocus => "clear_focus",
            Self::Share => "share",
            Self::ToggleHelp => "toggle_help",
            Self::OpenLocationPrompt => "open_location_prompt",
            Self::CycleTheme => "cycle_theme",
            Self::Notify(..) => "notify",
        }
    }
}
