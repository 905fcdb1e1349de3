//! Search-as-you-type over a fixed result set.
//!
//! Responsibilities:
//! - Debounce edits by 300 ms before filtering.
//! - Case-insensitive match on title or description.
//! - Sort by relevance (descending) or title (ascending).
//!
//! Invariants:
//! - A blank query yields no results.
//! - Every edit or sort change restarts the debounce window.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};
use showcase_config::constants::SEARCH_DEBOUNCE_MS;

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::runtime::timer::Debounce;
use crate::ui::theme::ThemeExt;

use super::common::{button, marker, render_card, row_style, write_lines};
use super::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub relevance: f32,
}

pub static SEARCH_DATA: [SearchResult; 5] = [
    SearchResult {
        id: 1,
        title: "Using wireless headphones",
        description: "Pairing and everyday use guide for wireless headphones",
        category: "Guide",
        relevance: 0.9,
    },
    SearchResult {
        id: 2,
        title: "Recommended smartwatch apps",
        description: "Useful apps for your smartwatch",
        category: "Apps",
        relevance: 0.8,
    },
    SearchResult {
        id: 3,
        title: "Laptop performance tuning",
        description: "Ways to make your laptop faster",
        category: "Tips",
        relevance: 0.7,
    },
    SearchResult {
        id: 4,
        title: "Sneaker care",
        description: "How to make sneakers last longer",
        category: "Care",
        relevance: 0.6,
    },
    SearchResult {
        id: 5,
        title: "Choosing coffee beans",
        description: "Picking beans for a better cup of coffee",
        category: "Guide",
        relevance: 0.5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    Title,
}

impl SortBy {
    pub fn toggled(self) -> Self {
        match self {
            Self::Relevance => Self::Title,
            Self::Title => Self::Relevance,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Title => "title",
        }
    }
}

/// Filter and sort `SEARCH_DATA` for `query`.
pub fn run_search(query: &str, sort: SortBy) -> Vec<&'static SearchResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let mut results: Vec<_> = SEARCH_DATA
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&query)
                || item.description.to_lowercase().contains(&query)
        })
        .collect();
    match sort {
        SortBy::Relevance => results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance)),
        SortBy::Title => results.sort_by(|a, b| a.title.cmp(b.title)),
    }
    results
}

const MAX_VISIBLE_RESULTS: usize = 5;

pub struct SearchSection {
    query: TextField,
    editing: bool,
    sort: SortBy,
    results: Vec<&'static SearchResult>,
    selected: usize,
    debounce: Debounce,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            query: TextField::new("Type to search..."),
            editing: false,
            sort: SortBy::default(),
            results: Vec::new(),
            selected: 0,
            debounce: Debounce::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
        }
    }
}

impl SearchSection {
    pub fn results(&self) -> &[&'static SearchResult] {
        &self.results
    }

    pub fn query(&self) -> &str {
        self.query.value()
    }

    pub fn sort(&self) -> SortBy {
        self.sort
    }

    pub fn is_searching(&self) -> bool {
        self.debounce.is_pending()
    }

    fn refresh(&mut self) {
        self.results = run_search(self.query.value(), self.sort);
        self.selected = self.selected.min(self.results.len().saturating_sub(1));
        tracing::debug!(
            query = self.query.value(),
            sort = self.sort.label(),
            hits = self.results.len(),
            "search refreshed"
        );
    }

    fn edit_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => {
                self.editing = false;
                if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
                    return KeyOutcome::Ignored;
                }
            }
            _ => {
                if self.query.handle_key(key) {
                    self.debounce.trigger(now);
                }
            }
        }
        KeyOutcome::Consumed
    }
}

impl Section for SearchSection {
    fn title(&self) -> &'static str {
        "Search"
    }

    fn height(&self, _width: u16) -> u16 {
        // borders + field + status + blank + results
        2 + 3 + MAX_VISIBLE_RESULTS as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        if inner.height == 0 {
            return;
        }
        let field_width = inner.width.saturating_sub(12);
        self.query.render(
            Rect::new(inner.x, inner.y, field_width, 1),
            buf,
            "⌕",
            self.editing && ctx.focused,
            ctx.theme,
        );
        buf.set_span(
            inner.x + field_width + 1,
            inner.y,
            &button("Sort", false, ctx.theme),
            inner.width.saturating_sub(field_width + 1),
        );

        let mut status = vec![Span::styled(
            format!("Sorted by {}", self.sort.label()),
            ctx.theme.text_dim(),
        )];
        if self.is_searching() {
            status.push(Span::styled("  • searching…", ctx.theme.info()));
        } else if !self.results.is_empty() {
            status.push(Span::styled(
                format!("  • {} results", self.results.len()),
                ctx.theme.text_dim(),
            ));
        } else if !self.query.is_blank() {
            status.push(Span::styled("  • no matches", ctx.theme.warning()));
        }

        let mut lines = vec![Line::from(status), Line::default()];
        for (index, result) in self.results.iter().enumerate() {
            let selected = index == self.selected && !self.editing;
            lines.push(Line::from(vec![
                Span::raw(marker(selected, ctx.focused)),
                Span::styled(
                    result.title,
                    row_style(selected, ctx.focused, ctx.theme).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", result.description), ctx.theme.text_dim()),
                Span::styled(format!("  [{}]", result.category), ctx.theme.info()),
            ]));
        }
        write_lines(
            Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            },
            buf,
            &lines,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        if self.editing {
            return self.edit_key(key, fx.now());
        }
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Enter => self.editing = true,
            KeyCode::Char('o') => {
                self.sort = self.sort.toggled();
                self.debounce.trigger(fx.now());
            }
            KeyCode::Char('x') => {
                self.query.clear();
                self.debounce.trigger(fx.now());
            }
            KeyCode::Up if !self.results.is_empty() => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down if !self.results.is_empty() => {
                self.selected = (self.selected + 1).min(self.results.len() - 1);
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn tick(&mut self, fx: &mut Effects) {
        if self.debounce.fire(fx.now()) {
            self.refresh();
        }
    }

    fn captures_text(&self) -> bool {
        self.editing
    }

    fn hints(&self) -> &'static str {
        if self.editing {
            "type to search  Enter/Esc done"
        } else {
            "/ edit  o sort  x clear  ↑/↓ results"
        }
    }

    fn focus_search(&mut self) -> bool {
        self.editing = true;
        true
    }

    fn blur(&mut self) {
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(section: &mut SearchSection, text: &str, now: Instant) {
        let mut fx = Effects::new(now);
        for c in text.chars() {
            section.handle_key(key(KeyCode::Char(c)), &mut fx);
        }
    }

    #[test]
    fn test_blank_query_has_no_results() {
        assert!(run_search("", SortBy::Relevance).is_empty());
        assert!(run_search("   ", SortBy::Title).is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive_over_title_and_description() {
        let hits = run_search("LAPTOP", SortBy::Relevance);
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);

        let hits = run_search("coffee", SortBy::Relevance);
        assert_eq!(hits.len(), 1, "description match");
    }

    #[test]
    fn test_sort_orders() {
        let by_relevance: Vec<u32> = run_search("s", SortBy::Relevance).iter().map(|r| r.id).collect();
        let mut sorted = by_relevance.clone();
        sorted.sort();
        assert_eq!(by_relevance, sorted, "ids follow descending relevance");

        let by_title: Vec<&str> = run_search("s", SortBy::Title).iter().map(|r| r.title).collect();
        let mut expected = by_title.clone();
        expected.sort();
        assert_eq!(by_title, expected);
    }

    #[test]
    fn test_results_update_only_after_quiet_period() {
        let start = Instant::now();
        let mut section = SearchSection::default();
        assert!(section.focus_search());
        type_text(&mut section, "smart", start);
        assert!(section.is_searching());

        let mut fx = Effects::new(start + Duration::from_millis(299));
        section.tick(&mut fx);
        assert!(section.results().is_empty());

        let mut fx = Effects::new(start + Duration::from_millis(300));
        section.tick(&mut fx);
        assert_eq!(section.results().len(), 1);
        assert!(!section.is_searching());
    }

    #[test]
    fn test_new_keystroke_restarts_debounce() {
        let start = Instant::now();
        let mut section = SearchSection::default();
        section.focus_search();
        type_text(&mut section, "sm", start);
        type_text(&mut section, "a", start + Duration::from_millis(200));

        section.tick(&mut Effects::new(start + Duration::from_millis(350)));
        assert!(section.results().is_empty(), "first trigger was superseded");

        section.tick(&mut Effects::new(start + Duration::from_millis(500)));
        assert_eq!(section.query(), "sma");
        assert_eq!(section.results().len(), 1);
    }

    #[test]
    fn test_escape_leaves_edit_mode() {
        let mut section = SearchSection::default();
        section.focus_search();
        assert!(section.captures_text());
        section.handle_key(key(KeyCode::Esc), &mut Effects::new(Instant::now()));
        assert!(!section.captures_text());
    }

    #[test]
    fn test_sort_toggle_retriggers_search() {
        let start = Instant::now();
        let mut section = SearchSection::default();
        section.focus_search();
        type_text(&mut section, "s", start);
        section.handle_key(key(KeyCode::Esc), &mut Effects::new(start));
        section.handle_key(key(KeyCode::Char('o')), &mut Effects::new(start));
        assert_eq!(section.sort(), SortBy::Title);
        assert!(section.is_searching());
    }
}
