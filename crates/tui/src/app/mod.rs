//! Navigation shell state and the single `update(Action)` entry point.
//!
//! Responsibilities:
//! - Own every piece of mutable shell state: route, menu, scroll, focus,
//!   toasts and overlays.
//! - Register environment listeners on mount and drop them on unmount.
//! - Apply actions from input, the event hub and widget sections.
//!
//! Does NOT handle:
//! - Reading the terminal (see `runtime::input`).
//! - Section-internal state (owned by the mounted `PageView`).
//!
//! Invariants:
//! - State is mutated only through `update`/`update_at` and `on_tick`.
//! - `nav.current_page` always equals the page derived from the location
//!   once pending fragment-change events are applied.

mod input;
mod layout;
mod navigation;
mod render;
mod scroll;
pub mod share;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use showcase_config::constants::PAGE_TRANSITION_MS;
use showcase_config::{ColorTheme, ShowcaseConfig, Theme};
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::pages::{Effects, PageView};
use crate::route::{HashRouter, Location, PageId};
use crate::runtime::events::{EventHub, EventKind, Subscription};
use crate::ui::Toast;
use crate::ui::components::AnimationController;
use crate::widgets::text_field::TextField;

pub use layout::{LayoutInputs, ShellLayout, SidebarMode, is_wide};
pub use navigation::NavigationState;
pub use scroll::{ScrollState, rows_to_px, scroll_progress, scroll_to_top_visible};

/// Rows taken by the header (title bar, location line, progress line).
pub const HEADER_HEIGHT: u16 = 3;

/// Rows taken by the footer hint line.
pub const FOOTER_HEIGHT: u16 = 1;

/// Wheel notch distance in rows.
pub const WHEEL_ROWS: i32 = 3;

const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// The showcase application.
pub struct App {
    config: ShowcaseConfig,
    color_theme: ColorTheme,
    theme: Theme,
    hub: EventHub,
    router: HashRouter,
    subscriptions: Vec<Subscription>,
    nav: NavigationState,
    scroll: ScrollState,
    view: PageView,
    transition: AnimationController,
    toasts: Vec<Toast>,
    show_help: bool,
    location_prompt: Option<TextField>,
    size: Rect,
    should_quit: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("fragment", &self.router.fragment())
            .field("nav", &self.nav)
            .field("scroll", &self.scroll.offset())
            .field("view", &self.view)
            .field("toasts", &self.toasts.len())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl App {
    /// Build the shell. The initial page is derived from the configured start fragment.
    pub fn new(config: &ShowcaseConfig, hub: EventHub) -> Self {
        Self::new_at(config, hub, Instant::now())
    }

    pub fn new_at(config: &ShowcaseConfig, hub: EventHub, now: Instant) -> Self {
        let initial = config.start_fragment.as_deref().unwrap_or("");
        let router = HashRouter::new(Location::new(initial, hub.clone()));
        let page = router.current_page();
        tracing::info!(page = %page, fragment = router.fragment(), "Shell created");

        Self {
            config: config.clone(),
            color_theme: config.theme,
            theme: Theme::from_color_theme(config.theme),
            hub,
            router,
            subscriptions: Vec::new(),
            nav: NavigationState::new(page),
            scroll: ScrollState::default(),
            view: PageView::compose(page, now),
            transition: AnimationController::ease_out(
                Duration::from_millis(PAGE_TRANSITION_MS),
                now,
            ),
            toasts: Vec::new(),
            show_help: false,
            location_prompt: None,
            size: Rect::new(0, 0, DEFAULT_SIZE.0, DEFAULT_SIZE.1),
            should_quit: false,
        }
    }

    /// Register listeners for every environment event kind, delivering to `tx`.
    pub fn mount(&mut self, tx: Sender<Action>) {
        self.subscriptions = [
            EventKind::HashChange,
            EventKind::KeyDown,
            EventKind::Pointer,
            EventKind::Resize,
        ]
        .into_iter()
        .map(|kind| self.hub.subscribe(kind, tx.clone()))
        .collect();
        tracing::debug!(listeners = self.subscriptions.len(), "Shell mounted");
    }

    /// Drop every listener registered by `mount`.
    pub fn unmount(&mut self) {
        let dropped = self.subscriptions.len();
        self.subscriptions.clear();
        tracing::debug!(listeners = dropped, "Shell unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_page(&self) -> PageId {
        self.nav.current_page
    }

    pub fn fragment(&self) -> &str {
        self.router.fragment()
    }

    pub fn router(&self) -> &HashRouter {
        &self.router
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn page_view(&self) -> &PageView {
        &self.view
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.color_theme
    }

    pub fn is_help_open(&self) -> bool {
        self.show_help
    }

    pub fn is_location_prompt_open(&self) -> bool {
        self.location_prompt.is_some()
    }

    pub fn size(&self) -> Rect {
        self.size
    }

    /// Layout for the current terminal size and shell state.
    pub fn layout(&self) -> ShellLayout {
        ShellLayout::compute(
            self.size,
            LayoutInputs {
                page: self.nav.current_page,
                sidebar: self.nav.sidebar,
                menu_open: self.nav.mobile_menu_open,
                wide_min_cols: self.config.wide_layout_min_cols,
                show_scroll_top: self.nav.show_scroll_to_top,
            },
        )
    }

    pub fn is_wide(&self) -> bool {
        is_wide(self.size.width, self.config.wide_layout_min_cols)
    }

    pub fn update(&mut self, action: Action) {
        self.update_at(action, Instant::now());
    }

    /// Apply `action` as if it happened at `now`.
    pub fn update_at(&mut self, action: Action, now: Instant) {
        if !matches!(action, Action::Tick | Action::Mouse(_)) {
            tracing::trace!(action = action.name(), "Applying action");
        }
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::Tick => self.on_tick(now),
            Action::Resize(width, height) => self.resize(width, height),
            Action::Input(key) => self.handle_key(key, now),
            Action::Mouse(mouse) => self.handle_mouse(mouse, now),

            Action::Navigate(page) => self.navigate(page, now),
            Action::HashChanged(fragment) => self.on_hash_changed(&fragment, now),
            Action::EditLocation(raw) => {
                tracing::info!(raw = %raw, "Location edited");
                let moved = self.router.edit(&raw);
                self.follow_location(moved, now);
            }
            Action::HistoryBack => {
                let moved = self.router.back();
                if !moved {
                    tracing::debug!("History has no previous entry");
                }
                self.follow_location(moved, now);
            }
            Action::HistoryForward => {
                let moved = self.router.forward();
                if !moved {
                    tracing::debug!("History has no next entry");
                }
                self.follow_location(moved, now);
            }

            Action::ToggleMenu => self.toggle_menu(),
            Action::CloseMenu => self.close_menu(),
            Action::MenuCursorUp => self.nav.move_menu_cursor(-1),
            Action::MenuCursorDown => self.nav.move_menu_cursor(1),
            Action::MenuSelect => {
                let page = self.nav.menu_cursor_page();
                self.navigate(page, now);
            }

            Action::ScrollBy(delta) => self.scroll_by(delta),
            Action::ScrollPage(pages) => {
                let step = i32::from(self.layout().body.height.saturating_sub(1).max(1));
                self.scroll_by(pages * step);
            }
            Action::ScrollToTop => {
                self.scroll.smooth_to_top(now);
            }
            Action::ScrollToBottom => {
                let max = self.max_scroll();
                self.scroll.set(max, max);
                self.track_scroll();
            }

            Action::FocusNext => {
                self.view.focus_next();
                self.reveal_focus();
            }
            Action::FocusPrevious => {
                self.view.focus_previous();
                self.reveal_focus();
            }
            Action::FocusSearch => {
                if self.view.focus_search() {
                    self.reveal_focus();
                }
            }
            Action::ClearFocus => {
                self.view.clear_focus();
            }

            Action::Share => self.share(),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::OpenLocationPrompt => {
                self.location_prompt = Some(
                    TextField::new("basics, forms or interactions")
                        .with_value(self.router.fragment()),
                );
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                tracing::info!(theme = self.color_theme.key(), "Theme changed");
                self.toasts
                    .push(Toast::info(format!("Theme: {}", self.color_theme.display_name())));
            }

            Action::Notify(level, message) => {
                tracing::debug!(level = level.label(), message = %message, "Toast");
                self.toasts.push(Toast::new(message, level));
            }
        }
    }

    /// Advance section timers, the scroll animation and toast expiry.
    pub fn on_tick(&mut self, now: Instant) {
        let max = self.max_scroll();
        if self.scroll.tick(now, max) {
            self.track_scroll();
        }

        let mut fx = Effects::new(now);
        self.view.tick(&mut fx);
        self.apply_effects(fx, now);

        self.toasts.retain(|toast| !toast.is_expired_at(now));
        self.scroll.clamp(self.max_scroll());
    }

    /// Fraction of the entry transition already played, 0.0..=1.0.
    pub fn transition_progress(&self, now: Instant) -> f64 {
        self.transition.progress_at(now)
    }

    fn apply_effects(&mut self, fx: Effects, now: Instant) {
        for action in fx.into_actions() {
            self.update_at(action, now);
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.size = Rect::new(0, 0, width, height);
        if self.is_wide() && self.nav.mobile_menu_open {
            tracing::debug!(width, "Viewport became wide, closing menu overlay");
            self.nav.mobile_menu_open = false;
        }
        self.scroll.clamp(self.max_scroll());
        self.track_scroll();
    }

    fn share(&mut self) {
        let url = self.config.share_url(self.router.fragment());
        match share::copy_to_clipboard(url.as_str()) {
            Ok(()) => {
                tracing::info!(url = %url, "Share link copied");
                self.toasts.push(Toast::success(format!("Link copied: {url}")));
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Share failed");
                self.toasts.push(Toast::error(format!("Could not copy link: {e}")));
            }
        }
    }
}

#[cfg(test)]
mod tests;
