//! Navigation: the one function every page change goes through, menu state
//! and home-page scroll tracking.
//!
//! Responsibilities:
//! - Write the fragment, switch the page and close the menu on `navigate`.
//! - Re-derive the page when the location reports a fragment change.
//! - Run the page-change side effects (recompose, entry transition, smooth scroll to top).
//! - Toggle the sidebar or the menu overlay depending on viewport width.
//!
//! Invariants:
//! - `navigate` always leaves the menu overlay closed.
//! - Scroll progress and the scroll-to-top flag only change while on home,
//!   and reset whenever the page changes.

use std::time::{Duration, Instant};

use showcase_config::constants::PAGE_TRANSITION_MS;

use super::layout::SidebarMode;
use super::scroll::{rows_to_px, scroll_progress, scroll_to_top_visible};
use super::App;
use crate::pages::PageView;
use crate::route::PageId;
use crate::ui::components::AnimationController;

/// Shell navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub current_page: PageId,
    /// Home-page scroll progress, 0..=100.
    pub scroll_progress: f64,
    pub show_scroll_to_top: bool,
    pub mobile_menu_open: bool,
    pub sidebar: SidebarMode,
    /// Highlighted entry in the menu overlay, as an index into `PageId::ALL`.
    pub menu_cursor: usize,
}

impl NavigationState {
    pub fn new(page: PageId) -> Self {
        Self {
            current_page: page,
            scroll_progress: 0.0,
            show_scroll_to_top: false,
            mobile_menu_open: false,
            sidebar: SidebarMode::default(),
            menu_cursor: page.index(),
        }
    }

    pub(super) fn move_menu_cursor(&mut self, delta: isize) {
        let len = PageId::ALL.len();
        self.menu_cursor = self
            .menu_cursor
            .saturating_add_signed(delta)
            .min(len - 1);
    }

    pub(super) fn menu_cursor_page(&self) -> PageId {
        PageId::ALL
            .get(self.menu_cursor)
            .copied()
            .unwrap_or_default()
    }

    fn reset_scroll_tracking(&mut self) {
        self.scroll_progress = 0.0;
        self.show_scroll_to_top = false;
    }
}

impl App {
    /// Programmatic navigation: write the fragment, switch page, close the menu.
    pub(super) fn navigate(&mut self, page: PageId, now: Instant) {
        let created_entry = self.router.navigate(page);
        tracing::info!(
            from = %self.nav.current_page,
            to = %page,
            fragment = self.router.fragment(),
            created_entry,
            "Navigate"
        );
        self.nav.mobile_menu_open = false;
        if page != self.nav.current_page {
            self.enter_page(page, now);
        }
    }

    /// Fragment-change listener. The payload is only logged: the page is
    /// derived from the location as it is now, so a stale event cannot undo
    /// a newer navigation.
    pub(super) fn on_hash_changed(&mut self, fragment: &str, now: Instant) {
        let page = self.router.current_page();
        tracing::debug!(event_fragment = fragment, current = self.router.fragment(), page = %page, "Fragment changed");
        if page != self.nav.current_page {
            self.enter_page(page, now);
        }
    }

    /// Re-derive the page after the router moved the location itself.
    ///
    /// The hub event for the same change may be dropped on a full channel,
    /// so a mounted shell does not wait for it.
    pub(super) fn follow_location(&mut self, moved: bool, now: Instant) {
        if moved && self.is_mounted() {
            let fragment = self.router.fragment().to_string();
            self.on_hash_changed(&fragment, now);
        }
    }

    fn enter_page(&mut self, page: PageId, now: Instant) {
        self.nav.current_page = page;
        self.nav.menu_cursor = page.index();
        self.nav.reset_scroll_tracking();
        self.view = PageView::compose(page, now);
        self.transition =
            AnimationController::ease_out(Duration::from_millis(PAGE_TRANSITION_MS), now);
        self.scroll.clamp(self.max_scroll());
        self.scroll.smooth_to_top(now);
        tracing::debug!(page = %page, sections = self.view.len(), "Page composed");
    }

    pub(super) fn toggle_menu(&mut self) {
        if self.is_wide() && !self.nav.current_page.is_home() {
            self.nav.sidebar = self.nav.sidebar.toggled();
            tracing::debug!(sidebar = ?self.nav.sidebar, "Sidebar toggled");
        } else {
            self.nav.mobile_menu_open = !self.nav.mobile_menu_open;
            if self.nav.mobile_menu_open {
                self.nav.menu_cursor = self.nav.current_page.index();
            }
            tracing::debug!(open = self.nav.mobile_menu_open, "Menu overlay toggled");
        }
    }

    pub(super) fn close_menu(&mut self) {
        self.nav.mobile_menu_open = false;
    }

    pub(super) fn max_scroll(&self) -> u16 {
        let layout = self.layout();
        self.view
            .content_height(layout.content_width())
            .saturating_sub(layout.body.height)
    }

    pub(super) fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
        self.track_scroll();
    }

    /// Recompute progress and the scroll-to-top flag. Inactive off home.
    pub(super) fn track_scroll(&mut self) {
        if !self.nav.current_page.is_home() {
            return;
        }
        let layout = self.layout();
        let top = rows_to_px(self.scroll.offset());
        let height = rows_to_px(self.view.content_height(layout.content_width()));
        let viewport = rows_to_px(layout.body.height);
        self.nav.scroll_progress = scroll_progress(top, height, viewport);
        self.nav.show_scroll_to_top = scroll_to_top_visible(top);
    }

    /// Scroll just enough to bring the focused section into view.
    pub(super) fn reveal_focus(&mut self) {
        let layout = self.layout();
        let Some(rect) = self.view.focused_rect(layout.content_width()) else {
            return;
        };
        let offset = self.scroll.offset();
        let viewport = layout.body.height;
        let target = if rect.y < offset {
            rect.y
        } else if rect.bottom() > offset.saturating_add(viewport) {
            rect.bottom().saturating_sub(viewport).min(rect.y)
        } else {
            return;
        };
        let max = self.max_scroll();
        self.scroll.set(target, max);
        self.track_scroll();
    }
}
