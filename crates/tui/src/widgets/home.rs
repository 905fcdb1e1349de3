//! Home page sections: hero banner, page cards, stats and getting started.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::route::{ViewDescriptor, content_pages};
use crate::ui::components::BigTextWidget;
use crate::ui::theme::ThemeExt;

use super::common::{button, render_card, write_lines};

/// Features shown on a card before the `+N more` tail.
const CARD_FEATURES: usize = 4;
const CARD_HEIGHT: u16 = 10;
/// Below this width the page cards stack vertically.
const CARD_ROW_MIN_WIDTH: u16 = 90;

pub struct Hero;

impl Section for Hero {
    fn title(&self) -> &'static str {
        "Welcome"
    }

    fn height(&self, _width: u16) -> u16 {
        10
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let [banner, _, text, chips] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(inner);

        BigTextWidget::new("UI KIT")
            .color(ctx.theme.accent)
            .render(banner, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                "A demo site for exercising a broad set of UI components.",
                ctx.theme.text(),
            )),
            Line::from(Span::styled(
                "Each category below collects widgets you can try out.",
                ctx.theme.text_dim(),
            )),
        ])
        .alignment(Alignment::Center)
        .render(text, buf);

        let chip = |keys: &'static str, label: &'static str| {
            [
                Span::styled(format!(" {keys} "), ctx.theme.highlight()),
                Span::styled(format!(" {label}   "), ctx.theme.text_dim()),
            ]
        };
        let spans: Vec<Span<'_>> = [
            chip("Ctrl+/", "toggle menu"),
            chip("Esc", "close menu"),
            chip("Ctrl+H", "home"),
        ]
        .into_iter()
        .flatten()
        .collect();
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(chips, buf);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// One card per content page; Enter navigates.
pub struct PageCards {
    pages: Vec<&'static ViewDescriptor>,
    selected: usize,
}

impl Default for PageCards {
    fn default() -> Self {
        Self {
            pages: content_pages().collect(),
            selected: 0,
        }
    }
}

impl PageCards {
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn is_row(width: u16) -> bool {
        width >= CARD_ROW_MIN_WIDTH
    }

    fn render_page_card(
        view: &ViewDescriptor,
        area: Rect,
        buf: &mut Buffer,
        selected: bool,
        ctx: &SectionContext<'_>,
    ) {
        let highlighted = selected && ctx.focused;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if highlighted {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(if highlighted {
                ctx.theme.border_focused()
            } else {
                ctx.theme.border()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", view.icon), ctx.theme.title()),
                Span::styled(view.title, ctx.theme.text().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(view.description, ctx.theme.text_dim())),
        ];
        for feature in view.features.iter().take(CARD_FEATURES) {
            lines.push(Line::from(Span::styled(format!("• {feature}"), ctx.theme.text())));
        }
        let extra = view.features.len().saturating_sub(CARD_FEATURES);
        lines.push(if extra > 0 {
            Line::from(Span::styled(format!("+{extra} more"), ctx.theme.text_dim()))
        } else {
            Line::default()
        });
        lines.push(Line::from(button("Explore →", highlighted, ctx.theme)));
        write_lines(inner, buf, &lines);
    }
}

impl Section for PageCards {
    fn title(&self) -> &'static str {
        "Categories"
    }

    fn height(&self, width: u16) -> u16 {
        if Self::is_row(width) {
            CARD_HEIGHT
        } else {
            CARD_HEIGHT * self.pages.len() as u16
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let count = self.pages.len() as u32;
        let rects = if Self::is_row(area.width) {
            Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count))).split(area)
        } else {
            Layout::vertical((0..count).map(|_| Constraint::Length(CARD_HEIGHT))).split(area)
        };
        for (index, (view, rect)) in self.pages.iter().zip(rects.iter()).enumerate() {
            Self::render_page_card(view, *rect, buf, index == self.selected, ctx);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        let last = self.pages.len().saturating_sub(1);
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1).min(last);
            }
            KeyCode::Enter => {
                if let Some(view) = self.pages.get(self.selected) {
                    fx.navigate(view.id);
                }
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "←/→ choose  Enter explore"
    }
}

/// Headline numbers.
pub struct Stats;

const STATS: [(&str, &str); 4] = [
    ("50+", "UI components"),
    ("15+", "Interactions"),
    ("8+", "Form elements"),
    ("5+", "Data displays"),
];

impl Section for Stats {
    fn title(&self) -> &'static str {
        "At a glance"
    }

    fn height(&self, _width: u16) -> u16 {
        4
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let columns = Layout::horizontal(STATS.iter().map(|_| Constraint::Ratio(1, 4))).split(inner);
        for ((value, label), column) in STATS.iter().zip(columns.iter()) {
            Paragraph::new(vec![
                Line::from(Span::styled(*value, ctx.theme.title())),
                Line::from(Span::styled(*label, ctx.theme.text_dim())),
            ])
            .alignment(Alignment::Center)
            .render(*column, buf);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Buttons that jump straight to a category.
pub struct GettingStarted {
    pages: Vec<&'static ViewDescriptor>,
    selected: usize,
}

impl Default for GettingStarted {
    fn default() -> Self {
        Self {
            pages: content_pages().collect(),
            selected: 0,
        }
    }
}

impl Section for GettingStarted {
    fn title(&self) -> &'static str {
        "Getting started"
    }

    fn height(&self, _width: u16) -> u16 {
        6
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut buttons = Vec::new();
        for (index, view) in self.pages.iter().enumerate() {
            buttons.push(button(
                view.title,
                ctx.focused && index == self.selected,
                ctx.theme,
            ));
            buttons.push(Span::raw("  "));
        }
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Pick one of the categories above to try its components.",
                ctx.theme.text(),
            )),
            Line::from(Span::styled(
                "Every page contains working widgets you can interact with.",
                ctx.theme.text_dim(),
            )),
            Line::default(),
            Line::from(buttons),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = (self.selected + 1).min(self.pages.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(view) = self.pages.get(self.selected) {
                    fx.navigate(view.id);
                }
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "←/→ choose  Enter go"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::route::PageId;
    use crossterm::event::KeyModifiers;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_page_cards_navigate_to_selected_page() {
        let mut cards = PageCards::default();
        let mut fx = Effects::new(Instant::now());
        cards.handle_key(key(KeyCode::Right), &mut fx);
        cards.handle_key(key(KeyCode::Right), &mut fx);
        cards.handle_key(key(KeyCode::Right), &mut fx);
        assert_eq!(cards.selected(), 2, "clamped to last card");
        cards.handle_key(key(KeyCode::Enter), &mut fx);
        assert_eq!(fx.actions(), &[Action::Navigate(PageId::Interactions)]);
    }

    #[test]
    fn test_page_cards_stack_when_narrow() {
        let cards = PageCards::default();
        assert_eq!(cards.height(120), CARD_HEIGHT);
        assert_eq!(cards.height(60), CARD_HEIGHT * 3);
    }

    #[test]
    fn test_getting_started_ignores_unrelated_keys() {
        let mut section = GettingStarted::default();
        let mut fx = Effects::new(Instant::now());
        assert_eq!(section.handle_key(key(KeyCode::Char('x')), &mut fx), KeyOutcome::Ignored);
        assert_eq!(section.handle_key(key(KeyCode::Enter), &mut fx), KeyOutcome::Consumed);
        assert_eq!(fx.actions(), &[Action::Navigate(PageId::Basics)]);
    }
}
