//! Static page descriptors.
//!
//! Pure data: titles, back-button flags and the catalog shown on the home page.

use super::page::PageId;

/// Compile-time description of a page's chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub id: PageId,
    pub title: &'static str,
    pub show_back_button: bool,
    /// Label used in the sidebar and menu.
    pub nav_label: &'static str,
    /// Single-cell glyph shown when the sidebar is collapsed.
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Descriptors in `PageId::ALL` order.
pub static VIEWS: [ViewDescriptor; 4] = [
    ViewDescriptor {
        id: PageId::Home,
        title: "UI Components Test Site",
        show_back_button: false,
        nav_label: "Home",
        icon: "⌂",
        description: "Browse and exercise a catalog of interface widgets",
        features: &[],
    },
    ViewDescriptor {
        id: PageId::Basics,
        title: "Basics",
        show_back_button: true,
        nav_label: "Basics",
        icon: "◆",
        description: "Search, accounts, cart, pagination and navigation components",
        features: &[
            "Search",
            "Login / Signup",
            "Cart",
            "Pagination",
            "Tabs",
            "Accordion",
            "Sidebar",
        ],
    },
    ViewDescriptor {
        id: PageId::Forms,
        title: "Forms & Feedback",
        show_back_button: true,
        nav_label: "Forms & Feedback",
        icon: "✎",
        description: "Form controls plus progress, toasts and loading states",
        features: &[
            "Radio buttons",
            "Toggle switches",
            "Dropdowns",
            "Date picker",
            "File upload",
            "Toasts",
            "Progress bars",
        ],
    },
    ViewDescriptor {
        id: PageId::Interactions,
        title: "Interactions & Data",
        show_back_button: true,
        nav_label: "Interactions & Data",
        icon: "⇄",
        description: "Gestures, menus, tables, charts and media",
        features: &[
            "Drag & drop",
            "Context menu",
            "Keyboard shortcuts",
            "Data table",
            "Charts",
            "Gallery",
            "Video player",
        ],
    },
];

/// Look up the descriptor for a page.
pub fn descriptor(id: PageId) -> &'static ViewDescriptor {
    &VIEWS[id.index()]
}

/// Every page except home, in sidebar order.
pub fn content_pages() -> impl Iterator<Item = &'static ViewDescriptor> {
    VIEWS.iter().filter(|view| !view.id.is_home())
}
