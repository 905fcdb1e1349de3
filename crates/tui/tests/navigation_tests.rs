//! End-to-end navigation scenarios through keys, clicks and fragment events.

mod helpers;

use std::time::Duration;

use crossterm::event::KeyCode;
use helpers::{TuiHarness, alt, code, ctrl_key, key};
use proptest::prelude::*;
use ui_showcase::{Action, App, EventHub, PageId};

#[test]
fn test_start_at_forms_then_back_to_home() {
    let mut harness = TuiHarness::new(Some("#forms"), 120, 30);
    insta::assert_debug_snapshot!(harness.app.navigation(), @r"
    NavigationState {
        current_page: Forms,
        scroll_progress: 0.0,
        show_scroll_to_top: false,
        mobile_menu_open: false,
        sidebar: Expanded,
        menu_cursor: 2,
    }
    ");
    assert!(harness.app.layout().sidebar.is_some());

    let back = harness.app.layout().back_button.expect("back button");
    harness.click(back.x, back.y);

    assert_eq!(harness.app.fragment(), "");
    assert_eq!(harness.app.current_page(), PageId::Home);
    assert!(harness.app.layout().sidebar.is_none());
}

#[test]
fn test_keyboard_round_trip_through_every_page() {
    let mut harness = TuiHarness::new(None, 100, 30);
    for (digit, page) in [('2', PageId::Basics), ('3', PageId::Forms), ('4', PageId::Interactions)] {
        harness.press(key(digit));
        assert_eq!(harness.app.current_page(), page);
        assert_eq!(harness.app.fragment(), page.fragment());
        harness.press(key('b'));
        assert_eq!(harness.app.current_page(), PageId::Home);
    }
    // Home, then one entry per visit and return.
    assert_eq!(harness.app.router().location().history().len(), 7);
}

#[test]
fn test_history_keys_follow_location() {
    let mut harness = TuiHarness::new(None, 100, 30);
    harness.send(Action::Navigate(PageId::Basics));
    harness.send(Action::Navigate(PageId::Interactions));

    harness.press(alt(KeyCode::Left));
    assert_eq!(harness.app.current_page(), PageId::Basics);
    harness.press(key('['));
    assert_eq!(harness.app.current_page(), PageId::Home);
    harness.press(key('['));
    assert_eq!(harness.app.current_page(), PageId::Home, "nothing further back");
    harness.press(alt(KeyCode::Right));
    harness.press(key(']'));
    assert_eq!(harness.app.current_page(), PageId::Interactions);
}

#[test]
fn test_menu_navigation_on_narrow_viewport() {
    let mut harness = TuiHarness::new(None, 80, 24);
    harness.press(ctrl_key('/'));
    assert!(harness.app.navigation().mobile_menu_open);

    harness.press(code(KeyCode::Down));
    harness.press(code(KeyCode::Enter));
    assert_eq!(harness.app.current_page(), PageId::Basics);
    assert!(!harness.app.navigation().mobile_menu_open);

    // Widening the terminal closes an open overlay.
    harness.press(key('m'));
    assert!(harness.app.navigation().mobile_menu_open);
    harness.send(Action::Resize(140, 40));
    assert!(!harness.app.navigation().mobile_menu_open);
}

#[test]
fn test_scroll_tracking_only_on_home() {
    let mut harness = TuiHarness::new(None, 80, 25);
    harness.press(code(KeyCode::End));
    assert_eq!(harness.app.navigation().scroll_progress, 100.0);
    assert!(harness.app.navigation().show_scroll_to_top);

    harness.press(key('2'));
    assert_eq!(harness.app.navigation().scroll_progress, 0.0);
    assert!(!harness.app.navigation().show_scroll_to_top);

    harness.advance(Duration::from_millis(400));
    assert_eq!(harness.app.scroll_offset(), 0, "page change scrolls to top");
    harness.press(code(KeyCode::PageDown));
    assert!(harness.app.scroll_offset() > 0);
    assert_eq!(harness.app.navigation().scroll_progress, 0.0);
}

#[test]
fn test_section_requests_navigation() {
    let mut harness = TuiHarness::new(None, 120, 40);
    // Hero, page cards, stats, getting started: Shift+Tab wraps to the last one.
    harness.press(code(KeyCode::BackTab));
    assert_eq!(
        harness.app.page_view().focused_title(),
        Some("Getting started")
    );
    harness.press(code(KeyCode::Enter));
    assert_eq!(harness.app.current_page(), PageId::Basics);
}

#[test]
fn test_unmounted_shell_receives_nothing() {
    let mut harness = TuiHarness::new(None, 80, 24);
    harness.app.unmount();
    assert_eq!(harness.hub.listener_count(), 0);

    harness.app.update_at(Action::Navigate(PageId::Forms), harness.now);
    assert!(harness.rx.try_recv().is_err(), "no listener, no delivery");
    assert_eq!(harness.app.current_page(), PageId::Forms);
}

#[test]
fn test_two_shells_share_a_hub_independently() {
    let hub = EventHub::new();
    let config = helpers::config(None);
    let mut first = App::new(&config, hub.clone());
    let mut second = App::new(&config, hub.clone());
    let (tx1, _rx1) = tokio::sync::mpsc::channel(8);
    let (tx2, _rx2) = tokio::sync::mpsc::channel(8);
    first.mount(tx1);
    second.mount(tx2);
    assert_eq!(hub.listener_count(), 8);

    drop(first);
    assert_eq!(hub.listener_count(), 4);
    second.unmount();
    assert_eq!(hub.listener_count(), 0);
}

proptest! {
    #[test]
    fn prop_unknown_start_fragment_mounts_home(fragment in "#?[a-zA-Z0-9/_-]{0,16}") {
        let bare = fragment.strip_prefix('#').unwrap_or(&fragment);
        prop_assume!(!["basics", "forms", "interactions"].contains(&bare));
        let harness = TuiHarness::new(Some(&fragment), 80, 24);
        prop_assert_eq!(harness.app.current_page(), PageId::Home);
    }

    #[test]
    fn prop_navigate_sets_fragment_and_closes_menu(
        pages in proptest::collection::vec(0usize..4, 1..12),
        open_first in any::<bool>(),
    ) {
        let mut harness = TuiHarness::new(None, 80, 24);
        for index in pages {
            let page = PageId::ALL[index];
            if open_first {
                harness.send(Action::ToggleMenu);
            }
            harness.send(Action::Navigate(page));
            prop_assert_eq!(harness.app.fragment(), page.fragment());
            prop_assert_eq!(harness.app.current_page(), page);
            prop_assert!(!harness.app.navigation().mobile_menu_open);
        }
    }
}
