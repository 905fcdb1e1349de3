//! Page compositions and the section contract they are built from.
//!
//! Responsibilities:
//! - Define the `Section` trait every widget section implements.
//! - Compose the fixed, ordered section list for each page.
//! - Lay sections out vertically, route keys to the focused section and
//!   render the composition into a scroll view.
//!
//! Does NOT handle:
//! - Routing or menu state (see `app::navigation`).
//! - Applying the actions a section emits (collected in `Effects` and
//!   applied by `App::update`).
//!
//! Invariants:
//! - A composition is rebuilt on every page entry; dropping it drops every
//!   section together with its timers.
//! - Only interactive sections can hold focus.
//! - No state is shared between sections.

mod basics;
mod forms;
mod home;
mod interactions;

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use showcase_config::Theme;
use tui_scrollview::ScrollView;

use crate::action::Action;
use crate::route::PageId;
use crate::ui::ToastLevel;

/// Blank rows between consecutive sections.
pub const SECTION_GAP: u16 = 1;

/// Whether a section used a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

/// Per-frame data handed to `Section::render`.
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    pub theme: &'a Theme,
    pub focused: bool,
    pub now: Instant,
}

/// Side effects requested by a section while handling a key or a tick.
#[derive(Debug)]
pub struct Effects {
    now: Instant,
    actions: Vec<Action>,
}

impl Effects {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            actions: Vec::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn notify(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.actions.push(Action::Notify(level, message.into()));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(ToastLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(ToastLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(ToastLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(ToastLevel::Error, message);
    }

    /// The only callback a section receives from the shell.
    pub fn navigate(&mut self, page: PageId) {
        self.actions.push(Action::Navigate(page));
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}

/// A self-contained presentational unit with local state.
pub trait Section {
    fn title(&self) -> &'static str;

    /// Rows needed at `width`, borders included.
    fn height(&self, width: u16) -> u16;

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>);

    fn is_interactive(&self) -> bool {
        true
    }

    fn handle_key(&mut self, _key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        KeyOutcome::Ignored
    }

    /// Called on every UI tick to advance timers.
    fn tick(&mut self, _fx: &mut Effects) {}

    /// True while the section is in a text-entry mode.
    fn captures_text(&self) -> bool {
        false
    }

    /// Key hints shown in the footer while focused.
    fn hints(&self) -> &'static str {
        ""
    }

    /// Put the section's search box into edit mode. Returns false when the
    /// section has none.
    fn focus_search(&mut self) -> bool {
        false
    }

    /// Focus moved away.
    fn blur(&mut self) {}
}

struct SectionWidget<'a> {
    section: &'a dyn Section,
    ctx: SectionContext<'a>,
}

impl Widget for SectionWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.section.render(area, buf, &self.ctx);
    }
}

/// The mounted composition of the active page.
pub struct PageView {
    page: PageId,
    sections: Vec<Box<dyn Section>>,
    focus: Option<usize>,
}

impl std::fmt::Debug for PageView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageView")
            .field("page", &self.page)
            .field("sections", &self.titles())
            .field("focus", &self.focus)
            .finish()
    }
}

impl PageView {
    /// Build the fixed composition for `page`.
    pub fn compose(page: PageId, now: Instant) -> Self {
        let sections = match page {
            PageId::Home => home::sections(now),
            PageId::Basics => basics::sections(now),
            PageId::Forms => forms::sections(now),
            PageId::Interactions => interactions::sections(now),
        };
        Self {
            page,
            sections,
            focus: None,
        }
    }

    pub fn page(&self) -> PageId {
        self.page
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.sections.iter().map(|section| section.title()).collect()
    }

    /// Section rectangles in content coordinates for a body `width` wide.
    pub fn layout(&self, width: u16) -> Vec<Rect> {
        let mut y: u16 = 0;
        self.sections
            .iter()
            .map(|section| {
                let height = section.height(width);
                let rect = Rect::new(0, y, width, height);
                y = y.saturating_add(height).saturating_add(SECTION_GAP);
                rect
            })
            .collect()
    }

    pub fn content_height(&self, width: u16) -> u16 {
        self.layout(width).last().map_or(0, |rect| rect.bottom())
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_title(&self) -> Option<&'static str> {
        self.focus.map(|index| self.sections[index].title())
    }

    pub fn focused_rect(&self, width: u16) -> Option<Rect> {
        self.focus
            .and_then(|index| self.layout(width).get(index).copied())
    }

    fn interactive_indices(&self) -> Vec<usize> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.is_interactive())
            .map(|(index, _)| index)
            .collect()
    }

    fn set_focus(&mut self, next: Option<usize>) {
        if next == self.focus {
            return;
        }
        if let Some(previous) = self.focus {
            self.sections[previous].blur();
        }
        self.focus = next;
    }

    /// Move focus to the next interactive section, wrapping around.
    pub fn focus_next(&mut self) -> Option<usize> {
        let candidates = self.interactive_indices();
        let next = match self.focus {
            None => candidates.first().copied(),
            Some(current) => candidates
                .iter()
                .copied()
                .find(|&index| index > current)
                .or_else(|| candidates.first().copied()),
        };
        self.set_focus(next);
        self.focus
    }

    /// Move focus to the previous interactive section, wrapping around.
    pub fn focus_previous(&mut self) -> Option<usize> {
        let candidates = self.interactive_indices();
        let previous = match self.focus {
            None => candidates.last().copied(),
            Some(current) => candidates
                .iter()
                .rev()
                .copied()
                .find(|&index| index < current)
                .or_else(|| candidates.last().copied()),
        };
        self.set_focus(previous);
        self.focus
    }

    /// Drop focus. Returns whether a section was focused.
    pub fn clear_focus(&mut self) -> bool {
        let had_focus = self.focus.is_some();
        self.set_focus(None);
        had_focus
    }

    /// Focus the section at content row `y`, if it is interactive.
    pub fn focus_at(&mut self, y: u16, width: u16) -> bool {
        let hit = self
            .layout(width)
            .iter()
            .position(|rect| y >= rect.top() && y < rect.bottom());
        match hit {
            Some(index) if self.sections[index].is_interactive() => {
                self.set_focus(Some(index));
                true
            }
            _ => false,
        }
    }

    /// Focus the first section with a search box and enter edit mode.
    pub fn focus_search(&mut self) -> bool {
        let Some(index) = self
            .sections
            .iter_mut()
            .position(|section| section.focus_search())
        else {
            return false;
        };
        if let Some(previous) = self.focus
            && previous != index
        {
            self.sections[previous].blur();
        }
        self.focus = Some(index);
        true
    }

    pub fn captures_text(&self) -> bool {
        self.focus
            .is_some_and(|index| self.sections[index].captures_text())
    }

    pub fn hints(&self) -> Option<&'static str> {
        self.focus.map(|index| self.sections[index].hints())
    }

    /// Offer `key` to the focused section.
    pub fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match self.focus {
            Some(index) => self.sections[index].handle_key(key, fx),
            None => KeyOutcome::Ignored,
        }
    }

    /// Advance every section's timers.
    pub fn tick(&mut self, fx: &mut Effects) {
        for section in &mut self.sections {
            section.tick(fx);
        }
    }

    /// Draw every section into `view`, whose width is `width`.
    pub fn render_into(&self, view: &mut ScrollView, width: u16, theme: &Theme, now: Instant) {
        for (index, (section, rect)) in self
            .sections
            .iter()
            .zip(self.layout(width))
            .enumerate()
        {
            let ctx = SectionContext {
                theme,
                focused: self.focus == Some(index),
                now,
            };
            view.render_widget(
                SectionWidget {
                    section: section.as_ref(),
                    ctx,
                },
                rect,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_every_page_composes_in_a_stable_order() {
        let now = Instant::now();
        for page in PageId::ALL {
            let first = PageView::compose(page, now);
            let second = PageView::compose(page, now);
            assert!(!first.is_empty(), "{page} has no sections");
            assert_eq!(first.titles(), second.titles());
            assert_eq!(first.page(), page);
        }
    }

    #[test]
    fn test_layout_stacks_sections_with_gaps() {
        let view = PageView::compose(PageId::Forms, Instant::now());
        let rects = view.layout(80);
        for pair in rects.windows(2) {
            assert_eq!(pair[1].y, pair[0].bottom() + SECTION_GAP);
        }
        assert_eq!(view.content_height(80), rects.last().map_or(0, |r| r.bottom()));
    }

    #[test]
    fn test_focus_cycles_over_interactive_sections_only() {
        let mut view = PageView::compose(PageId::Home, Instant::now());
        let interactive = view.interactive_indices();
        assert!(interactive.len() >= 2);

        assert_eq!(view.focus_next(), interactive.first().copied());
        for _ in 1..interactive.len() {
            view.focus_next();
        }
        assert_eq!(view.focused(), interactive.last().copied());
        assert_eq!(view.focus_next(), interactive.first().copied(), "wraps");
        assert_eq!(view.focus_previous(), interactive.last().copied(), "wraps back");

        assert!(view.clear_focus());
        assert!(!view.clear_focus());
    }

    #[test]
    fn test_unfocused_page_ignores_keys() {
        let mut view = PageView::compose(PageId::Basics, Instant::now());
        let mut fx = Effects::new(Instant::now());
        let outcome = view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut fx);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert!(fx.is_empty());
    }

    #[test]
    fn test_focus_search_only_on_basics() {
        let now = Instant::now();
        let mut basics = PageView::compose(PageId::Basics, now);
        assert!(basics.focus_search());
        assert!(basics.captures_text());

        for page in [PageId::Home, PageId::Forms, PageId::Interactions] {
            let mut view = PageView::compose(page, now);
            assert!(!view.focus_search(), "{page}");
            assert_eq!(view.focused(), None);
        }
    }

    #[test]
    fn test_focus_at_hits_interactive_sections() {
        let mut view = PageView::compose(PageId::Home, Instant::now());
        let rects = view.layout(100);
        let hero = rects[0];
        assert!(!view.focus_at(hero.y, 100), "hero is not interactive");
        let cards = rects[1];
        assert!(view.focus_at(cards.y + 1, 100));
        assert_eq!(view.focused(), Some(1));
    }
}
