//! Rendering of the navigation shell.
//!
//! Responsibilities:
//! - Draw the header, sidebar, scrollable page body and footer.
//! - Draw overlays on top: menu, help, location prompt and toasts.
//!
//! Does NOT handle:
//! - Input (see `input.rs`).
//! - Section content (each section draws itself via `PageView::render_into`).
//!
//! Invariants:
//! - Every clickable element is drawn inside the rectangle `ShellLayout` gives it.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Position, Rect, Size},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, LineGauge, Paragraph},
};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::App;
use super::layout::{
    BACK_BUTTON_LABEL, MENU_BUTTON_LABEL, SCROLL_TOP_LABEL, SHARE_BUTTON_LABEL, ShellLayout,
    SidebarMode,
};
use crate::input::help::contextual_help_text;
use crate::route::{PageId, descriptor};
use crate::ui::popup::{centered_rect, render_popup};
use crate::ui::theme::{ThemeExt, helpers};
use crate::ui::toast::render_toasts;

const DEFAULT_HINTS: &str = "Tab focus  ↑↓ scroll  : location  s share  ? help  q quit";

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.render_at(f, Instant::now());
    }

    pub fn render_at(&mut self, f: &mut Frame, now: Instant) {
        let area = f.area();
        if area != self.size {
            self.resize(area.width, area.height);
        }
        let layout = self.layout();

        self.render_header(f, &layout);
        if let Some(sidebar) = layout.sidebar {
            self.render_sidebar(f, sidebar);
        }
        self.render_body(f, &layout, now);
        self.render_footer(f, layout.footer);

        if let Some(overlay) = layout.overlay {
            self.render_menu_overlay(f, overlay);
        }
        if self.show_help {
            self.render_help(f, area);
        }
        if self.location_prompt.is_some() {
            self.render_location_prompt(f, area);
        }
        render_toasts(f, &self.toasts, &self.theme);
    }

    fn render_header(&self, f: &mut Frame, layout: &ShellLayout) {
        let theme = &self.theme;
        let header = layout.header;
        if header.height == 0 {
            return;
        }
        let view = descriptor(self.nav.current_page);

        let menu_style = if self.nav.mobile_menu_open {
            helpers::primary_button_style(theme)
        } else {
            helpers::secondary_button_style(theme)
        };
        f.render_widget(
            Paragraph::new(MENU_BUTTON_LABEL).style(menu_style),
            layout.menu_button,
        );
        if let Some(back) = layout.back_button {
            f.render_widget(
                Paragraph::new(BACK_BUTTON_LABEL).style(helpers::secondary_button_style(theme)),
                back,
            );
        }

        let title_x = layout
            .back_button
            .unwrap_or(layout.menu_button)
            .right()
            .saturating_add(1);
        let title_width = layout.share_button.x.saturating_sub(title_x + 1);
        f.render_widget(
            Paragraph::new(view.title).style(theme.title()),
            Rect::new(title_x, header.y, title_width, 1).intersection(header),
        );
        f.render_widget(
            Paragraph::new(SHARE_BUTTON_LABEL).style(helpers::primary_button_style(theme)),
            layout.share_button,
        );

        if header.height > 1 {
            let fragment = self.router.fragment();
            let mut spans = vec![
                Span::styled(" location ", theme.text_dim()),
                Span::styled(format!("#{fragment}"), theme.info()),
            ];
            if fragment.is_empty() {
                spans.push(Span::styled("  (home)", theme.text_dim()));
            }
            let history = self.router.location().history();
            if history.can_go_back() || history.can_go_forward() {
                spans.push(Span::styled(
                    format!("  history {}", history.len()),
                    theme.text_dim(),
                ));
            }
            if let Some(focused) = self.view.focused_title() {
                spans.push(Span::styled("  focus ", theme.text_dim()));
                spans.push(Span::styled(focused, theme.text()));
            }
            f.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(header.x, header.y + 1, header.width, 1),
            );
        }

        if header.height > 2 {
            let row = Rect::new(header.x, header.y + 2, header.width, 1);
            if self.nav.current_page.is_home() {
                let progress = self.nav.scroll_progress.clamp(0.0, 100.0);
                f.render_widget(
                    LineGauge::default()
                        .ratio(progress / 100.0)
                        .label(format!("{progress:>3.0}%"))
                        .filled_style(Style::default().fg(theme.progress_fill))
                        .unfilled_style(theme.border()),
                    row,
                );
            } else {
                f.render_widget(
                    Block::default()
                        .borders(Borders::TOP)
                        .border_style(theme.border()),
                    row,
                );
            }
        }
    }

    fn render_sidebar(&self, f: &mut Frame, sidebar: Rect) {
        let theme = &self.theme;
        f.render_widget(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(theme.border()),
            sidebar,
        );
        let lines: Vec<Line> = PageId::ALL
            .iter()
            .map(|&page| {
                let view = descriptor(page);
                let text = match self.nav.sidebar {
                    SidebarMode::Expanded => format!(" {} {}", view.icon, view.nav_label),
                    SidebarMode::Collapsed => format!(" {}", view.icon),
                };
                if page == self.nav.current_page {
                    Line::styled(
                        text,
                        Style::default()
                            .fg(theme.sidebar_active)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::styled(text, theme.text())
                }
            })
            .collect();
        let entries = Rect::new(
            sidebar.x,
            sidebar.y.saturating_add(1),
            sidebar.width.saturating_sub(1),
            sidebar.height.saturating_sub(1),
        );
        f.render_widget(Paragraph::new(lines), entries);
    }

    fn render_body(&self, f: &mut Frame, layout: &ShellLayout, now: Instant) {
        let body = layout.body;
        if body.width < 2 || body.height == 0 {
            return;
        }
        let width = layout.content_width();
        let height = self.view.content_height(width);
        let mut scroll_view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        self.view.render_into(&mut scroll_view, width, &self.theme, now);
        let mut state = ScrollViewState::with_offset(Position::new(0, self.scroll.offset()));
        f.render_stateful_widget(scroll_view, body, &mut state);

        if self.transition_progress(now) < 1.0 {
            f.buffer_mut()
                .set_style(body, Style::default().add_modifier(Modifier::DIM));
        }

        if let Some(top) = layout.scroll_top_button {
            f.render_widget(
                Paragraph::new(SCROLL_TOP_LABEL).style(helpers::primary_button_style(&self.theme)),
                top,
            );
        }
    }

    fn render_footer(&self, f: &mut Frame, footer: Rect) {
        if footer.height == 0 {
            return;
        }
        let theme = &self.theme;
        let hints = if self.nav.mobile_menu_open {
            "↑↓ choose  Enter open  Esc close"
        } else {
            self.view
                .hints()
                .filter(|hints| !hints.is_empty())
                .unwrap_or(DEFAULT_HINTS)
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.color_theme.display_name()), theme.info()),
            Span::styled("│ ", theme.border()),
            Span::styled(hints, theme.text_dim()),
        ]);
        f.render_widget(Paragraph::new(line), footer);
    }

    fn render_menu_overlay(&self, f: &mut Frame, overlay: Rect) {
        let theme = &self.theme;
        let lines: Vec<Line> = PageId::ALL
            .iter()
            .enumerate()
            .map(|(index, &page)| {
                let view = descriptor(page);
                let marker = if index == self.nav.menu_cursor { "›" } else { " " };
                let text = format!("{marker}{} {}", view.icon, view.nav_label);
                if index == self.nav.menu_cursor {
                    Line::styled(text, helpers::selected_style(theme))
                } else if page == self.nav.current_page {
                    Line::styled(text, Style::default().fg(theme.sidebar_active))
                } else {
                    Line::styled(text, theme.text())
                }
            })
            .collect();
        f.render_widget(Clear, overlay);
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_focused())
                    .title(" Menu ")
                    .title_style(theme.title()),
            ),
            overlay,
        );
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let text = contextual_help_text(self.nav.current_page);
        let lines: Vec<Line> = text.lines().map(|line| Line::from(line.to_string())).collect();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        render_popup(f, centered_rect(64, height, area), "Help", lines, &self.theme);
    }

    fn render_location_prompt(&self, f: &mut Frame, area: Rect) {
        let Some(prompt) = &self.location_prompt else {
            return;
        };
        let theme = &self.theme;
        let popup = centered_rect(50, 3, area);
        f.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focused())
            .title(" Go to location ")
            .title_style(theme.title());
        let inner = block.inner(popup);
        f.render_widget(block, popup);
        prompt.render(inner, f.buffer_mut(), "#", true, theme);
    }
}
