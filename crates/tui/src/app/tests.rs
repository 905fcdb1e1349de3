use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use showcase_config::{ConfigLoader, ShowcaseConfig};
use tokio::sync::mpsc::{Receiver, channel};

use super::share::{ShareError, install_failing_clipboard, install_recording_clipboard};
use super::*;
use crate::ui::ToastLevel;

fn config(start: Option<&str>) -> ShowcaseConfig {
    let mut loader = ConfigLoader::new();
    if let Some(start) = start {
        loader = loader.with_start_fragment(start.to_string());
    }
    loader.build().unwrap()
}

struct Harness {
    app: App,
    hub: EventHub,
    rx: Receiver<Action>,
    now: Instant,
}

impl Harness {
    fn new(start: Option<&str>, width: u16, height: u16) -> Self {
        let now = Instant::now();
        let hub = EventHub::new();
        let mut app = App::new_at(&config(start), hub.clone(), now);
        let (tx, rx) = channel(64);
        app.mount(tx);
        app.update_at(Action::Resize(width, height), now);
        Self { app, hub, rx, now }
    }

    /// Apply an action, then everything the hub delivered in response.
    fn send(&mut self, action: Action) {
        self.app.update_at(action, self.now);
        self.pump();
    }

    fn pump(&mut self) {
        while let Ok(action) = self.rx.try_recv() {
            self.app.update_at(action, self.now);
        }
    }

    fn key(&mut self, code: KeyCode) {
        self.send(Action::Input(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        self.send(Action::Input(KeyEvent::new(code, modifiers)));
    }

    fn click(&mut self, column: u16, row: u16) {
        self.send(Action::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn advance(&mut self, by: Duration) {
        self.now += by;
        self.send(Action::Tick);
    }
}

#[test]
fn test_navigate_writes_fragment_and_page() {
    let mut h = Harness::new(None, 80, 24);
    for page in PageId::ALL {
        h.send(Action::Navigate(page));
        assert_eq!(h.app.fragment(), page.fragment());
        assert_eq!(h.app.current_page(), page);
    }
}

#[test]
fn test_invalid_start_fragment_mounts_home() {
    for start in ["#nope", "FORMS", "#/basics", "basics/", "   ", "#"] {
        let h = Harness::new(Some(start), 80, 24);
        assert_eq!(h.app.current_page(), PageId::Home, "{start:?}");
    }
    let h = Harness::new(Some(" #forms "), 80, 24);
    assert_eq!(h.app.current_page(), PageId::Forms);
}

#[test]
fn test_navigate_closes_open_menu() {
    let mut h = Harness::new(None, 80, 24);
    for page in PageId::ALL {
        h.send(Action::ToggleMenu);
        assert!(h.app.navigation().mobile_menu_open);
        h.send(Action::Navigate(page));
        assert!(!h.app.navigation().mobile_menu_open, "{page}");
    }
}

#[test]
fn test_start_at_forms_then_back_button() {
    let mut h = Harness::new(Some("#forms"), 120, 30);
    assert_eq!(h.app.current_page(), PageId::Forms);
    let layout = h.app.layout();
    assert!(layout.sidebar.is_some());
    let back = layout.back_button.expect("back button on content pages");

    h.click(back.x + 1, back.y);
    assert_eq!(h.app.fragment(), "");
    assert_eq!(h.app.current_page(), PageId::Home);
    assert!(h.app.layout().sidebar.is_none());
    assert!(h.app.layout().back_button.is_none());
}

#[test]
fn test_home_scroll_tracking_resets_on_page_change() {
    // 53 content rows in a 21-row body: 32 rows of scrollable distance.
    let mut h = Harness::new(None, 80, 25);
    assert_eq!(h.app.max_scroll(), 32);

    h.send(Action::ScrollBy(16));
    assert_eq!(h.app.navigation().scroll_progress, 50.0);
    assert!(!h.app.navigation().show_scroll_to_top);

    h.send(Action::ScrollBy(10));
    assert!(h.app.navigation().show_scroll_to_top, "26 rows is 416 px");

    h.send(Action::Navigate(PageId::Basics));
    assert_eq!(h.app.navigation().scroll_progress, 0.0);
    assert!(!h.app.navigation().show_scroll_to_top);

    h.advance(Duration::from_millis(400));
    h.send(Action::ScrollBy(20));
    assert!(h.app.scroll_offset() > 0);
    assert_eq!(h.app.navigation().scroll_progress, 0.0);
    assert!(!h.app.navigation().show_scroll_to_top);
}

#[test]
fn test_repeated_navigation_creates_one_history_entry() {
    let mut h = Harness::new(None, 80, 24);
    let before = h.app.router().location().history().len();
    h.send(Action::Navigate(PageId::Forms));
    h.send(Action::Navigate(PageId::Forms));
    assert_eq!(h.app.router().location().history().len(), before + 1);
}

#[test]
fn test_unmount_drops_every_listener() {
    let mut h = Harness::new(None, 80, 24);
    assert_eq!(h.hub.listener_count(), 4);
    for kind in [
        EventKind::HashChange,
        EventKind::KeyDown,
        EventKind::Pointer,
        EventKind::Resize,
    ] {
        assert_eq!(h.hub.listener_count_for(kind), 1, "{kind:?}");
    }
    assert!(h.app.is_mounted());
    h.app.unmount();
    assert_eq!(h.hub.listener_count(), 0);
    assert_eq!(h.hub.listener_count_for(EventKind::HashChange), 0);
    assert!(!h.app.is_mounted());
}

#[test]
fn test_dropping_app_unregisters_listeners() {
    let h = Harness::new(None, 80, 24);
    let hub = h.hub.clone();
    assert_eq!(hub.listener_count(), 4);
    drop(h);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn test_escape_closes_menu_with_any_modifiers() {
    let mut h = Harness::new(None, 80, 24);
    for modifiers in [KeyModifiers::NONE, KeyModifiers::SHIFT, KeyModifiers::ALT] {
        h.send(Action::ToggleMenu);
        h.key_with(KeyCode::Esc, modifiers);
        assert!(!h.app.navigation().mobile_menu_open);
    }
}

#[test]
fn test_command_shortcuts() {
    let mut h = Harness::new(Some("interactions"), 80, 24);
    h.key_with(KeyCode::Char('h'), KeyModifiers::CONTROL);
    assert_eq!(h.app.current_page(), PageId::Home);

    h.key_with(KeyCode::Char('/'), KeyModifiers::SUPER);
    assert!(h.app.navigation().mobile_menu_open);

    // Plain keys are not shortcuts.
    h.key(KeyCode::Esc);
    h.key(KeyCode::Char('/'));
    assert!(!h.app.navigation().mobile_menu_open);
}

#[test]
fn test_menu_toggle_depends_on_viewport() {
    let mut h = Harness::new(Some("basics"), 120, 30);
    h.send(Action::ToggleMenu);
    assert_eq!(h.app.navigation().sidebar, SidebarMode::Collapsed);
    assert!(!h.app.navigation().mobile_menu_open);
    h.send(Action::ToggleMenu);
    assert_eq!(h.app.navigation().sidebar, SidebarMode::Expanded);

    h.send(Action::Resize(80, 30));
    h.send(Action::ToggleMenu);
    assert!(h.app.navigation().mobile_menu_open);
    assert!(h.app.layout().overlay.is_some());

    h.send(Action::Resize(120, 30));
    assert!(!h.app.navigation().mobile_menu_open, "wide viewport closes overlay");
}

#[test]
fn test_menu_keyboard_selection() {
    let mut h = Harness::new(None, 80, 24);
    h.key_with(KeyCode::Char('/'), KeyModifiers::CONTROL);
    h.key(KeyCode::Down);
    h.key(KeyCode::Down);
    h.key(KeyCode::Enter);
    assert_eq!(h.app.current_page(), PageId::Forms);
    assert!(!h.app.navigation().mobile_menu_open);
}

#[test]
fn test_menu_overlay_clicks() {
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::ToggleMenu);
    let overlay = h.app.layout().overlay.unwrap();

    h.click(overlay.right() + 5, overlay.y + 3);
    assert!(!h.app.navigation().mobile_menu_open, "outside click closes");

    h.send(Action::ToggleMenu);
    h.click(overlay.x + 2, overlay.y + 4);
    assert_eq!(h.app.current_page(), PageId::Interactions);
    assert!(!h.app.navigation().mobile_menu_open);
}

#[test]
fn test_sidebar_click_navigates() {
    let mut h = Harness::new(Some("forms"), 120, 30);
    let sidebar = h.app.layout().sidebar.unwrap();
    h.click(sidebar.x + 2, sidebar.y + 2);
    assert_eq!(h.app.current_page(), PageId::Basics);
    assert_eq!(h.app.fragment(), "basics");
}

#[test]
fn test_history_traversal_goes_through_fragment_events() {
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::Navigate(PageId::Forms));
    h.send(Action::Navigate(PageId::Interactions));

    h.key_with(KeyCode::Left, KeyModifiers::ALT);
    assert_eq!(h.app.current_page(), PageId::Forms);
    h.send(Action::HistoryBack);
    assert_eq!(h.app.current_page(), PageId::Home);
    h.send(Action::HistoryForward);
    assert_eq!(h.app.current_page(), PageId::Forms);
}

#[test]
fn test_history_back_follows_location_immediately() {
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::Navigate(PageId::Forms));
    h.app.update_at(Action::HistoryBack, h.now);
    assert_eq!(h.app.fragment(), "");
    assert_eq!(h.app.current_page(), PageId::Home);
    h.pump();
    assert_eq!(h.app.current_page(), PageId::Home);
}

#[test]
fn test_history_stays_in_sync_when_event_channel_is_full() {
    let now = Instant::now();
    let hub = EventHub::new();
    let mut app = App::new_at(&config(None), hub.clone(), now);
    let (tx, mut rx) = channel(4);
    app.mount(tx.clone());
    app.update_at(Action::Resize(80, 24), now);
    app.update_at(Action::Navigate(PageId::Forms), now);
    while rx.try_recv().is_ok() {}

    for _ in 0..4 {
        tx.try_send(Action::Input(KeyEvent::new(KeyCode::Null, KeyModifiers::NONE)))
            .unwrap();
    }
    app.update_at(Action::HistoryBack, now);
    app.update_at(Action::EditLocation("interactions".to_string()), now);
    while let Ok(action) = rx.try_recv() {
        assert!(!matches!(action, Action::HashChanged(_)), "channel was full");
    }

    assert_eq!(app.fragment(), "interactions");
    assert_eq!(PageId::from_fragment(app.fragment()), app.current_page());

    for _ in 0..4 {
        tx.try_send(Action::Input(KeyEvent::new(KeyCode::Null, KeyModifiers::NONE)))
            .unwrap();
    }
    app.update_at(Action::HistoryBack, now);
    assert_eq!(app.fragment(), "");
    assert_eq!(PageId::from_fragment(app.fragment()), app.current_page());
}

#[test]
fn test_unmounted_shell_ignores_history_moves() {
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::Navigate(PageId::Forms));
    h.app.unmount();
    h.app.update_at(Action::HistoryBack, h.now);
    assert_eq!(h.app.fragment(), "");
    assert_eq!(h.app.current_page(), PageId::Forms);
}

#[test]
fn test_stale_fragment_event_does_not_revert_navigation() {
    let mut h = Harness::new(None, 80, 24);
    h.app.update_at(Action::Navigate(PageId::Forms), h.now);
    h.app.update_at(Action::Navigate(PageId::Basics), h.now);
    h.pump();
    assert_eq!(h.app.current_page(), PageId::Basics);
}

#[test]
fn test_location_prompt_edits_fragment() {
    let mut h = Harness::new(None, 80, 24);
    h.key(KeyCode::Char(':'));
    assert!(h.app.is_location_prompt_open());
    for c in "#forms".chars() {
        h.key(KeyCode::Char(c));
    }
    h.key(KeyCode::Enter);
    assert!(!h.app.is_location_prompt_open());
    assert_eq!(h.app.fragment(), "forms");
    assert_eq!(h.app.current_page(), PageId::Forms);

    h.key(KeyCode::Char(':'));
    h.key_with(KeyCode::Char('u'), KeyModifiers::CONTROL);
    for c in "Nowhere".chars() {
        h.key(KeyCode::Char(c));
    }
    h.key(KeyCode::Enter);
    assert_eq!(h.app.fragment(), "Nowhere");
    assert_eq!(h.app.current_page(), PageId::Home);
}

#[test]
fn test_focus_search_captures_printable_keys() {
    let mut h = Harness::new(Some("basics"), 100, 30);
    h.key_with(KeyCode::Char('k'), KeyModifiers::CONTROL);
    assert!(h.app.page_view().captures_text());

    h.key(KeyCode::Char('q'));
    assert!(!h.app.should_quit(), "q is text while searching");

    h.key(KeyCode::Esc);
    assert!(!h.app.page_view().captures_text());
    h.key(KeyCode::Esc);
    assert_eq!(h.app.page_view().focused(), None);

    h.key(KeyCode::Char('q'));
    assert!(h.app.should_quit());
}

#[test]
fn test_focus_search_is_inert_elsewhere() {
    let mut h = Harness::new(Some("forms"), 100, 30);
    h.key_with(KeyCode::Char('k'), KeyModifiers::CONTROL);
    assert_eq!(h.app.page_view().focused(), None);
}

#[test]
fn test_section_navigation_effect() {
    let mut h = Harness::new(None, 120, 40);
    // Hero is not interactive: the first Tab lands on the page cards.
    h.key(KeyCode::Tab);
    assert_eq!(h.app.page_view().focused_title(), Some("Categories"));
    h.key(KeyCode::Right);
    h.key(KeyCode::Enter);
    assert_eq!(h.app.current_page(), PageId::Forms);
    assert_eq!(h.app.page_view().focused(), None, "new composition starts unfocused");
}

#[test]
fn test_page_change_smooth_scrolls_to_top() {
    let mut h = Harness::new(None, 80, 25);
    h.send(Action::ScrollBy(30));
    h.send(Action::Navigate(PageId::Forms));
    assert!(h.app.scroll.is_animating());
    assert!(h.app.scroll_offset() > 0);

    h.advance(Duration::from_millis(150));
    assert!(h.app.scroll_offset() < 30);
    h.advance(Duration::from_millis(200));
    assert_eq!(h.app.scroll_offset(), 0);
    assert!(!h.app.scroll.is_animating());
}

#[test]
fn test_entry_transition_runs_for_300ms() {
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::Navigate(PageId::Basics));
    assert!(h.app.transition_progress(h.now) < 1.0);
    assert_eq!(
        h.app.transition_progress(h.now + Duration::from_millis(300)),
        1.0
    );
}

#[test]
fn test_scroll_to_top_button_click() {
    let mut h = Harness::new(None, 80, 25);
    h.send(Action::ScrollBy(30));
    let top = h.app.layout().scroll_top_button.expect("shown past 400 px");
    h.click(top.x, top.y);
    h.advance(Duration::from_millis(400));
    assert_eq!(h.app.scroll_offset(), 0);
    assert!(h.app.layout().scroll_top_button.is_none());
}

#[test]
fn test_wheel_scrolls_body() {
    let mut h = Harness::new(None, 80, 25);
    h.send(Action::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }));
    assert_eq!(h.app.scroll_offset(), WHEEL_ROWS as u16);
}

#[test]
fn test_share_copies_url_and_toasts() {
    let clipboard = install_recording_clipboard();
    let mut h = Harness::new(Some("forms"), 80, 24);
    h.key(KeyCode::Char('s'));
    assert_eq!(
        clipboard.copied().as_deref(),
        Some("http://localhost:5173/#forms")
    );
    let toast = h.app.toasts().last().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
    assert!(toast.message.contains("#forms"));
}

#[test]
fn test_share_failure_is_an_error_toast() {
    let _clipboard = install_failing_clipboard(ShareError::Unavailable("no display".into()));
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::Share);
    let toast = h.app.toasts().last().unwrap();
    assert_eq!(toast.level, ToastLevel::Error);
    assert!(toast.message.contains("no display"));
    assert_eq!(h.app.toasts().len(), 1, "no retries");
}

#[test]
fn test_toasts_expire_on_tick() {
    let mut h = Harness::new(None, 80, 24);
    h.send(Action::Notify(ToastLevel::Info, "hello".into()));
    h.send(Action::Notify(ToastLevel::Error, "boom".into()));
    h.advance(Duration::from_secs(6));
    assert_eq!(h.app.toasts().len(), 1);
    h.advance(Duration::from_secs(5));
    assert!(h.app.toasts().is_empty());
}

#[test]
fn test_cycle_theme_changes_palette() {
    let mut h = Harness::new(None, 80, 24);
    let before = h.app.color_theme();
    h.key(KeyCode::Char('t'));
    assert_ne!(h.app.color_theme(), before);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut h = Harness::new(None, 80, 24);
    h.key(KeyCode::Char('?'));
    assert!(h.app.is_help_open());
    h.key(KeyCode::Char('2'));
    assert_eq!(h.app.current_page(), PageId::Home);
    h.key(KeyCode::Esc);
    assert!(!h.app.is_help_open());
    h.key(KeyCode::Char('2'));
    assert_eq!(h.app.current_page(), PageId::Basics);
}

#[test]
fn test_leaving_page_releases_section_timers() {
    let mut h = Harness::new(Some("forms"), 100, 30);
    h.advance(Duration::from_millis(500));
    h.send(Action::Navigate(PageId::Home));
    // Forms timers (progress, skeleton, toast demo) must not fire on home.
    h.advance(Duration::from_secs(5));
    assert!(h.app.toasts().is_empty());
}
