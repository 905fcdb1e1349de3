//! Navigation components: tabs, FAQ accordion and breadcrumb trails.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::ui::theme::{ThemeExt, helpers};

use super::common::{button, marker, render_card, row_style, switch, write_lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Analytics,
    Reports,
    Notifications,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Overview,
        Tab::Analytics,
        Tab::Reports,
        Tab::Notifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Analytics => "Analytics",
            Tab::Reports => "Reports",
            Tab::Notifications => "Notifications",
        }
    }
}

const REPORTS: [&str; 3] = [
    "Weekly performance report",
    "Monthly analytics report",
    "User feedback summary",
];
const NOTIFICATION_CHANNELS: [&str; 3] = ["Email alerts", "Push notifications", "Mentions"];

#[derive(Debug, Default)]
pub struct TabsSection {
    active: usize,
    row: usize,
    channels: [bool; 3],
}

impl TabsSection {
    pub fn active(&self) -> Tab {
        Tab::ALL[self.active]
    }

    fn rows(&self) -> usize {
        match self.active() {
            Tab::Reports => REPORTS.len(),
            Tab::Notifications => NOTIFICATION_CHANNELS.len(),
            Tab::Overview | Tab::Analytics => 0,
        }
    }

    fn body(&self, ctx: &SectionContext<'_>) -> Vec<Line<'static>> {
        let metric = |value: &'static str, label: &'static str| {
            Line::from(vec![
                Span::styled(format!("{value:>8}  "), ctx.theme.title()),
                Span::styled(label, ctx.theme.text_dim()),
            ])
        };
        match self.active() {
            Tab::Overview => vec![
                Line::from(Span::styled("Project overview", ctx.theme.text().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    "Overall status and key metrics of the current project.",
                    ctx.theme.text_dim(),
                )),
                metric("24", "Active tasks"),
                metric("8", "Team members"),
                metric("92%", "Completion"),
            ],
            Tab::Analytics => vec![
                Line::from(Span::styled("Analytics", ctx.theme.text().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    "Detailed performance data for the project.",
                    ctx.theme.text_dim(),
                )),
                metric("1,234", "Daily active users"),
                metric("3.45%", "Conversion rate"),
                metric("4m 32s", "Average session"),
            ],
            Tab::Reports => {
                let mut lines = vec![Line::from(Span::styled(
                    "Reports",
                    ctx.theme.text().add_modifier(Modifier::BOLD),
                ))];
                lines.push(Line::from(Span::styled(
                    "Download regularly generated reports.",
                    ctx.theme.text_dim(),
                )));
                for (index, report) in REPORTS.iter().enumerate() {
                    let selected = index == self.row;
                    lines.push(Line::from(vec![
                        Span::raw(marker(selected, ctx.focused)),
                        Span::styled(format!("{report:<28}"), row_style(selected, ctx.focused, ctx.theme)),
                        button("Download", selected && ctx.focused, ctx.theme),
                    ]));
                }
                lines
            }
            Tab::Notifications => {
                let mut lines = vec![Line::from(Span::styled(
                    "Notification settings",
                    ctx.theme.text().add_modifier(Modifier::BOLD),
                ))];
                lines.push(Line::from(Span::styled(
                    "Manage how you are notified.",
                    ctx.theme.text_dim(),
                )));
                for (index, channel) in NOTIFICATION_CHANNELS.iter().enumerate() {
                    let selected = index == self.row;
                    lines.push(Line::from(vec![
                        Span::raw(marker(selected, ctx.focused)),
                        Span::styled(format!("{channel:<28}"), row_style(selected, ctx.focused, ctx.theme)),
                        Span::styled(switch(self.channels[index]), ctx.theme.info()),
                    ]));
                }
                lines
            }
        }
    }
}

impl Section for TabsSection {
    fn title(&self) -> &'static str {
        "Tabs"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 2 + 5
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut tabs = Vec::new();
        for (index, tab) in Tab::ALL.iter().enumerate() {
            let style = if index == self.active {
                if ctx.focused {
                    helpers::selected_style(ctx.theme)
                } else {
                    ctx.theme.title()
                }
            } else {
                ctx.theme.text_dim()
            };
            tabs.push(Span::styled(format!(" {} ", tab.label()), style));
            tabs.push(Span::raw(" "));
        }
        let mut lines = vec![Line::from(tabs), Line::default()];
        lines.extend(self.body(ctx));
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left => {
                self.active = self.active.checked_sub(1).unwrap_or(Tab::ALL.len() - 1);
                self.row = 0;
            }
            KeyCode::Right => {
                self.active = (self.active + 1) % Tab::ALL.len();
                self.row = 0;
            }
            KeyCode::Up if self.rows() > 0 => self.row = self.row.saturating_sub(1),
            KeyCode::Down if self.rows() > 0 => self.row = (self.row + 1).min(self.rows() - 1),
            KeyCode::Enter | KeyCode::Char(' ') if self.rows() > 0 => match self.active() {
                Tab::Reports => fx.info(format!("Downloading {}", REPORTS[self.row])),
                Tab::Notifications => {
                    self.channels[self.row] = !self.channels[self.row];
                    let state = if self.channels[self.row] { "on" } else { "off" };
                    fx.info(format!("{} turned {state}", NOTIFICATION_CHANNELS[self.row]));
                }
                Tab::Overview | Tab::Analytics => {}
            },
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "←/→ tab  ↑/↓ row  Enter activate"
    }
}

static FAQ: [(&str, &str); 4] = [
    (
        "FAQ 1: Getting started",
        "Sign up first, then log in to use every feature. A tutorial is available for first-time users so you can get going quickly.",
    ),
    (
        "FAQ 2: Pricing and payment",
        "The basic service is free; premium features are billed monthly. Cards, bank transfer and mobile payments are supported.",
    ),
    (
        "FAQ 3: Data security",
        "Personal data is protected by strict security controls. All data is stored encrypted and audited regularly.",
    ),
    (
        "FAQ 4: Customer support",
        "Support is available 24/7 by email, chat and phone, with detailed help articles and a community forum.",
    ),
];

/// Rows reserved for an expanded answer.
const ANSWER_ROWS: u16 = 3;

/// Single-open, collapsible accordion.
#[derive(Debug, Default)]
pub struct AccordionSection {
    cursor: usize,
    open: Option<usize>,
}

impl AccordionSection {
    pub fn open(&self) -> Option<usize> {
        self.open
    }
}

impl Section for AccordionSection {
    fn title(&self) -> &'static str {
        "Accordion"
    }

    fn height(&self, _width: u16) -> u16 {
        let answer = if self.open.is_some() { ANSWER_ROWS } else { 0 };
        2 + FAQ.len() as u16 + answer
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut y = inner.y;
        for (index, (question, answer)) in FAQ.iter().enumerate() {
            if y >= inner.bottom() {
                break;
            }
            let expanded = self.open == Some(index);
            let selected = index == self.cursor;
            let line = Line::from(vec![
                Span::raw(marker(selected, ctx.focused)),
                Span::styled(if expanded { "▾ " } else { "▸ " }, ctx.theme.text_dim()),
                Span::styled(*question, row_style(selected, ctx.focused, ctx.theme)),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
            if expanded {
                let rows = ANSWER_ROWS.min(inner.bottom().saturating_sub(y));
                Paragraph::new(*answer)
                    .style(ctx.theme.text_dim())
                    .wrap(Wrap { trim: true })
                    .render(Rect::new(inner.x + 4, y, inner.width.saturating_sub(4), rows), buf);
                y += rows;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(FAQ.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.open = if self.open == Some(self.cursor) {
                    None
                } else {
                    Some(self.cursor)
                };
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "↑/↓ question  Enter expand/collapse"
    }
}

/// A trail of links ending in the current page.
struct Trail {
    label: &'static str,
    crumbs: &'static [(&'static str, Option<&'static str>)],
}

static TRAILS: [Trail; 3] = [
    Trail {
        label: "Product",
        crumbs: &[
            ("Home", Some("/")),
            ("Products", Some("/products")),
            ("Laptops", Some("/products/laptops")),
            ("MacBook Pro", None),
        ],
    },
    Trail {
        label: "Settings",
        crumbs: &[
            ("Dashboard", Some("/")),
            ("Settings", Some("/settings")),
            ("Account", Some("/settings/account")),
            ("Edit profile", None),
        ],
    },
    Trail {
        label: "Project",
        crumbs: &[
            ("Workspace", Some("/workspace")),
            ("Projects", Some("/workspace/projects")),
            ("UI components", Some("/workspace/projects/ui-components")),
            ("Test site", None),
        ],
    },
];

#[derive(Debug, Default)]
pub struct BreadcrumbSection {
    trail: usize,
    crumb: usize,
}

impl Section for BreadcrumbSection {
    fn title(&self) -> &'static str {
        "Breadcrumbs"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 2 * TRAILS.len() as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = Vec::new();
        for (trail_index, trail) in TRAILS.iter().enumerate() {
            lines.push(Line::from(Span::styled(trail.label, ctx.theme.text_dim())));
            let mut spans = vec![Span::raw("  ")];
            for (index, (label, href)) in trail.crumbs.iter().enumerate() {
                if index > 0 {
                    spans.push(Span::styled(" › ", ctx.theme.border()));
                }
                let active = ctx.focused && trail_index == self.trail && index == self.crumb;
                let style = match (active, href) {
                    (true, _) => helpers::selected_style(ctx.theme),
                    (false, Some(_)) => ctx.theme.info().add_modifier(Modifier::UNDERLINED),
                    (false, None) => ctx.theme.text().add_modifier(Modifier::BOLD),
                };
                spans.push(Span::styled(*label, style));
            }
            lines.push(Line::from(spans));
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        let crumbs = TRAILS[self.trail].crumbs;
        match key.code {
            KeyCode::Up => {
                self.trail = self.trail.saturating_sub(1);
                self.crumb = self.crumb.min(TRAILS[self.trail].crumbs.len() - 1);
            }
            KeyCode::Down => {
                self.trail = (self.trail + 1).min(TRAILS.len() - 1);
                self.crumb = self.crumb.min(TRAILS[self.trail].crumbs.len() - 1);
            }
            KeyCode::Left => self.crumb = self.crumb.saturating_sub(1),
            KeyCode::Right => self.crumb = (self.crumb + 1).min(crumbs.len() - 1),
            KeyCode::Enter => match crumbs[self.crumb] {
                (label, Some(href)) => fx.info(format!("{label} → {href}")),
                (label, None) => fx.info(format!("{label} is the current page")),
            },
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "↑/↓ trail  ←/→ crumb  Enter follow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tabs_wrap_around() {
        let mut tabs = TabsSection::default();
        let mut fx = Effects::new(Instant::now());
        tabs.handle_key(key(KeyCode::Left), &mut fx);
        assert_eq!(tabs.active(), Tab::Notifications);
        tabs.handle_key(key(KeyCode::Right), &mut fx);
        assert_eq!(tabs.active(), Tab::Overview);
    }

    #[test]
    fn test_accordion_is_single_open_and_collapsible() {
        let mut accordion = AccordionSection::default();
        let mut fx = Effects::new(Instant::now());
        let collapsed = accordion.height(80);

        accordion.handle_key(key(KeyCode::Enter), &mut fx);
        assert_eq!(accordion.open(), Some(0));
        assert_eq!(accordion.height(80), collapsed + ANSWER_ROWS);

        accordion.handle_key(key(KeyCode::Down), &mut fx);
        accordion.handle_key(key(KeyCode::Enter), &mut fx);
        assert_eq!(accordion.open(), Some(1), "opening another closes the first");

        accordion.handle_key(key(KeyCode::Enter), &mut fx);
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn test_breadcrumb_current_page_is_not_a_link() {
        let mut crumbs = BreadcrumbSection::default();
        let mut fx = Effects::new(Instant::now());
        for _ in 0..5 {
            crumbs.handle_key(key(KeyCode::Right), &mut fx);
        }
        crumbs.handle_key(key(KeyCode::Enter), &mut fx);
        assert_eq!(
            fx.actions(),
            &[crate::action::Action::Notify(
                crate::ui::ToastLevel::Info,
                "MacBook Pro is the current page".into()
            )]
        );
    }
}
