//! Rendering tests for the navigation shell over a `TestBackend`.

mod helpers;

use crossterm::event::KeyCode;
use helpers::{TuiHarness, code, ctrl_key, key, row};
use ui_showcase::app::share::install_recording_clipboard;
use ui_showcase::{Action, PageId};

#[test]
fn test_home_header_has_no_back_button() {
    let mut harness = TuiHarness::new(None, 80, 24);
    let screen = harness.render_settled();

    assert!(row(&screen, 0).contains("[≡]"));
    assert!(row(&screen, 0).contains("UI Components Test Site"));
    assert!(row(&screen, 0).contains("[⇪ Share]"));
    assert!(!screen.contains("[← Back]"));
    assert!(row(&screen, 1).contains("(home)"));
    assert!(row(&screen, 2).contains("0%"), "progress line on home");
}

#[test]
fn test_forms_on_wide_terminal_renders_sidebar() {
    let mut harness = TuiHarness::new(Some("#forms"), 120, 30);
    let screen = harness.render_settled();

    assert!(row(&screen, 0).contains("[← Back]"));
    assert!(row(&screen, 0).contains("Forms & Feedback"));
    assert!(row(&screen, 1).contains("#forms"));
    assert!(screen.contains("⌂ Home"));
    assert!(screen.contains("◆ Basics"));
    assert!(screen.contains("Interactions"));
    assert!(!row(&screen, 2).contains('%'), "progress only shows on home");
}

#[test]
fn test_collapsed_sidebar_shows_icons_only() {
    let mut harness = TuiHarness::new(Some("basics"), 120, 30);
    harness.send(Action::ToggleMenu);
    let screen = harness.render_settled();

    assert!(!screen.contains("⌂ Home"));
    let sidebar_row = row(&screen, 4);
    assert!(sidebar_row.starts_with(" ⌂"), "{sidebar_row:?}");
}

#[test]
fn test_narrow_terminal_uses_overlay_menu() {
    let mut harness = TuiHarness::new(Some("interactions"), 80, 24);
    let before = harness.render_settled();
    assert!(!before.contains("⌂ Home"), "no sidebar on narrow viewports");

    harness.press(ctrl_key('/'));
    let screen = harness.render();
    assert!(screen.contains(" Menu "));
    assert!(screen.contains("Home"));
    assert!(screen.contains("›"), "cursor marks the current page");

    harness.press(code(KeyCode::Esc));
    assert!(!harness.render().contains(" Menu "));
}

#[test]
fn test_scroll_to_top_affordance_appears_past_threshold() {
    let mut harness = TuiHarness::new(None, 80, 25);
    assert!(!harness.render_settled().contains("[↑ Top]"));

    harness.send(Action::ScrollBy(26));
    let screen = harness.render();
    assert!(screen.contains("[↑ Top]"));
    assert!(row(&screen, 2).contains("81%"), "26 of 32 rows");
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut harness = TuiHarness::new(Some("forms"), 100, 40);
    harness.press(key('?'));
    let screen = harness.render();
    assert!(screen.contains(" Help "));
    assert!(screen.contains("Ctrl+H"));
    assert!(screen.contains("Toggle menu"));
}

#[test]
fn test_location_prompt_renders_current_fragment() {
    let mut harness = TuiHarness::new(Some("basics"), 80, 24);
    harness.press(key(':'));
    let screen = harness.render();
    assert!(screen.contains(" Go to location "));
    assert!(screen.contains("# basics"));
}

#[test]
fn test_share_toast_is_rendered() {
    let clipboard = install_recording_clipboard();
    let mut harness = TuiHarness::new(Some("interactions"), 100, 30);
    harness.press(key('s'));
    assert_eq!(
        clipboard.copied().as_deref(),
        Some("http://localhost:5173/#interactions")
    );
    let screen = harness.render();
    assert!(screen.contains("Link copied"));
}

#[test]
fn test_footer_shows_focused_section_hints() {
    let mut harness = TuiHarness::new(None, 100, 30);
    let idle = harness.render_settled();
    assert!(row(&idle, 29).contains("? help"));

    harness.press(code(KeyCode::Tab));
    let focused = harness.render();
    assert!(row(&focused, 29).contains("Enter explore"));
    assert!(row(&focused, 1).contains("focus Categories"));
}

#[test]
fn test_every_page_renders_at_common_sizes() {
    for page in PageId::ALL {
        for (width, height) in [(40, 12), (80, 24), (160, 50)] {
            let mut harness = TuiHarness::new(Some(page.fragment()), width, height);
            harness.send(Action::ScrollToBottom);
            let screen = harness.render_settled();
            assert_eq!(screen.lines().count(), usize::from(height), "{page} {width}x{height}");
        }
    }
}
