//! Shell layout shared by rendering and mouse hit-testing.
//!
//! Responsibilities:
//! - Split the terminal into header, body, footer and the optional sidebar.
//! - Place the clickable header buttons, menu entries and the scroll-to-top affordance.
//!
//! Does NOT handle:
//! - Drawing (see `render.rs`) or reacting to clicks (see `input.rs`).
//!
//! Invariants:
//! - Render and hit-testing call `ShellLayout::compute` with the same inputs,
//!   so every clickable rectangle is exactly where it was drawn.
//! - The sidebar only exists on wide viewports and never on the home page.

use ratatui::layout::{Position, Rect};
use showcase_config::constants::{SIDEBAR_COLLAPSED_WIDTH, SIDEBAR_EXPANDED_WIDTH};

use super::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::route::{PageId, descriptor};

pub const MENU_BUTTON_LABEL: &str = "[≡]";
pub const BACK_BUTTON_LABEL: &str = "[← Back]";
pub const SHARE_BUTTON_LABEL: &str = "[⇪ Share]";
pub const SCROLL_TOP_LABEL: &str = "[↑ Top]";

/// Width of the slide-in menu overlay.
pub const MENU_OVERLAY_WIDTH: u16 = 30;

/// Persistent sidebar width mode on wide viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMode {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn width(self) -> u16 {
        match self {
            Self::Expanded => SIDEBAR_EXPANDED_WIDTH,
            Self::Collapsed => SIDEBAR_COLLAPSED_WIDTH,
        }
    }
}

/// Inputs that decide where the shell chrome goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInputs {
    pub page: PageId,
    pub sidebar: SidebarMode,
    pub menu_open: bool,
    pub wide_min_cols: u16,
    pub show_scroll_top: bool,
}

pub fn is_wide(width: u16, wide_min_cols: u16) -> bool {
    width >= wide_min_cols
}

fn label_width(label: &str) -> u16 {
    u16::try_from(label.chars().count()).unwrap_or(u16::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub header: Rect,
    pub footer: Rect,
    /// Scrollable page area, scrollbar column included.
    pub body: Rect,
    pub sidebar: Option<Rect>,
    pub overlay: Option<Rect>,
    pub menu_button: Rect,
    pub back_button: Option<Rect>,
    pub share_button: Rect,
    pub scroll_top_button: Option<Rect>,
}

impl ShellLayout {
    pub fn compute(area: Rect, inputs: LayoutInputs) -> Self {
        let header_height = HEADER_HEIGHT.min(area.height);
        let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
        let middle_height = area.height - header_height - footer_height;

        let header = Rect::new(area.x, area.y, area.width, header_height);
        let middle = Rect::new(area.x, area.y + header_height, area.width, middle_height);
        let footer = Rect::new(area.x, middle.bottom(), area.width, footer_height);

        let wide = is_wide(area.width, inputs.wide_min_cols);
        let sidebar = (wide && !inputs.page.is_home()).then(|| {
            let width = inputs.sidebar.width().min(area.width);
            Rect::new(middle.x, middle.y, width, middle.height)
        });
        let body = match sidebar {
            Some(sidebar) => Rect::new(
                sidebar.right(),
                middle.y,
                middle.width - sidebar.width,
                middle.height,
            ),
            None => middle,
        };

        let overlay = inputs.menu_open.then(|| {
            Rect::new(
                middle.x,
                middle.y,
                MENU_OVERLAY_WIDTH.min(middle.width),
                middle.height,
            )
        });

        let menu_button = Rect::new(
            header.x + 1,
            header.y,
            label_width(MENU_BUTTON_LABEL).min(header.width.saturating_sub(1)),
            header_height.min(1),
        );
        let back_button = descriptor(inputs.page).show_back_button.then(|| {
            Rect::new(
                menu_button.right() + 1,
                header.y,
                label_width(BACK_BUTTON_LABEL),
                header_height.min(1),
            )
            .intersection(header)
        });
        let share_width = label_width(SHARE_BUTTON_LABEL).min(header.width);
        let share_button = Rect::new(
            header.right().saturating_sub(share_width + 1),
            header.y,
            share_width,
            header_height.min(1),
        );

        let scroll_top_button = (inputs.show_scroll_top && body.height > 0).then(|| {
            let width = label_width(SCROLL_TOP_LABEL);
            Rect::new(
                body.right().saturating_sub(width + 2),
                body.bottom() - 1,
                width,
                1,
            )
            .intersection(body)
        });

        Self {
            header,
            footer,
            body,
            sidebar,
            overlay,
            menu_button,
            back_button,
            share_button,
            scroll_top_button,
        }
    }

    /// Width available to sections, leaving one column for the scrollbar.
    pub fn content_width(&self) -> u16 {
        self.body.width.saturating_sub(1)
    }

    /// Sidebar destination under `pos`. Entries start one row below the top.
    pub fn sidebar_entry_at(&self, pos: Position) -> Option<PageId> {
        let sidebar = self.sidebar?;
        if !sidebar.contains(pos) || pos.x + 1 >= sidebar.right() {
            return None;
        }
        entry_at_row(sidebar, pos)
    }

    /// Menu overlay destination under `pos`. Entries start inside the border.
    pub fn overlay_entry_at(&self, pos: Position) -> Option<PageId> {
        let overlay = self.overlay?;
        if !overlay.contains(pos) || pos.x == overlay.x || pos.x + 1 >= overlay.right() {
            return None;
        }
        entry_at_row(overlay, pos)
    }
}

fn entry_at_row(container: Rect, pos: Position) -> Option<PageId> {
    let row = pos.y.checked_sub(container.y + 1)?;
    PageId::ALL.get(usize::from(row)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(page: PageId) -> LayoutInputs {
        LayoutInputs {
            page,
            sidebar: SidebarMode::Expanded,
            menu_open: false,
            wide_min_cols: 100,
            show_scroll_top: false,
        }
    }

    #[test]
    fn test_wide_content_page_gets_sidebar() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 120, 40), inputs(PageId::Forms));
        let sidebar = layout.sidebar.unwrap();
        assert_eq!(sidebar.width, SIDEBAR_EXPANDED_WIDTH);
        assert_eq!(layout.body.x, sidebar.right());
        assert_eq!(layout.body.width + sidebar.width, 120);
        assert_eq!(layout.body.y, HEADER_HEIGHT);
        assert_eq!(layout.footer.y, 40 - FOOTER_HEIGHT);
    }

    #[test]
    fn test_home_and_narrow_have_no_sidebar() {
        let home = ShellLayout::compute(Rect::new(0, 0, 120, 40), inputs(PageId::Home));
        assert!(home.sidebar.is_none());
        assert!(home.back_button.is_none());

        let narrow = ShellLayout::compute(Rect::new(0, 0, 80, 40), inputs(PageId::Forms));
        assert!(narrow.sidebar.is_none());
        assert!(narrow.back_button.is_some());
        assert_eq!(narrow.body.width, 80);
    }

    #[test]
    fn test_collapsed_sidebar_is_narrower() {
        let mut collapsed = inputs(PageId::Basics);
        collapsed.sidebar = SidebarMode::Collapsed;
        let layout = ShellLayout::compute(Rect::new(0, 0, 120, 40), collapsed);
        assert_eq!(layout.sidebar.unwrap().width, SIDEBAR_COLLAPSED_WIDTH);
    }

    #[test]
    fn test_entry_hit_testing() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 120, 40), inputs(PageId::Forms));
        let top = layout.sidebar.unwrap().y;
        assert_eq!(layout.sidebar_entry_at(Position::new(2, top)), None);
        assert_eq!(
            layout.sidebar_entry_at(Position::new(2, top + 1)),
            Some(PageId::Home)
        );
        assert_eq!(
            layout.sidebar_entry_at(Position::new(2, top + 4)),
            Some(PageId::Interactions)
        );
        assert_eq!(layout.sidebar_entry_at(Position::new(2, top + 5)), None);

        let mut open = inputs(PageId::Home);
        open.menu_open = true;
        let layout = ShellLayout::compute(Rect::new(0, 0, 60, 30), open);
        let overlay = layout.overlay.unwrap();
        assert_eq!(
            layout.overlay_entry_at(Position::new(3, overlay.y + 2)),
            Some(PageId::Basics)
        );
        assert_eq!(layout.overlay_entry_at(Position::new(40, overlay.y + 2)), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let mut all = inputs(PageId::Interactions);
        all.show_scroll_top = true;
        let layout = ShellLayout::compute(Rect::new(0, 0, 100, 30), all);
        let back = layout.back_button.unwrap();
        assert!(layout.menu_button.right() < back.x);
        assert!(back.right() < layout.share_button.x);
        let top = layout.scroll_top_button.unwrap();
        assert!(layout.body.contains(top.as_position()));
        assert_eq!(top.bottom(), layout.body.bottom());
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let layout = ShellLayout::compute(Rect::new(0, 0, 5, 2), inputs(PageId::Forms));
        assert_eq!(layout.body.height, 0);
        assert!(layout.scroll_top_button.is_none());
    }
}
