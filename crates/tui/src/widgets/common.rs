//! Building blocks shared by the widget sections.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use showcase_config::Theme;

use crate::pages::{Section, SectionContext};
use crate::ui::theme::{ThemeExt, helpers};

/// Draw the bordered card every section sits in and return its inner area.
pub fn render_card(area: Rect, buf: &mut Buffer, title: &str, ctx: &SectionContext<'_>) -> Rect {
    let border_style = if ctx.focused {
        ctx.theme.border_focused()
    } else {
        ctx.theme.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if ctx.focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style)
        .title(Line::from(format!(" {title} ")).style(ctx.theme.title()));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// `[ label ]`, highlighted when active.
pub fn button(label: &str, active: bool, theme: &Theme) -> Span<'static> {
    let style = if active {
        helpers::primary_button_style(theme)
    } else {
        helpers::secondary_button_style(theme)
    };
    Span::styled(format!("[ {label} ]"), style)
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn radio(selected: bool) -> &'static str {
    if selected { "(•)" } else { "( )" }
}

pub fn switch(on: bool) -> &'static str {
    if on { "━━●" } else { "●━━" }
}

/// Cursor marker for list rows.
pub fn marker(selected: bool, focused: bool) -> &'static str {
    match (selected, focused) {
        (true, true) => "› ",
        (true, false) => "· ",
        _ => "  ",
    }
}

/// Row style for a list entry.
pub fn row_style(selected: bool, focused: bool, theme: &Theme) -> Style {
    if selected && focused {
        helpers::selected_style(theme)
    } else if selected {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    }
}

/// `₩1,299,000`.
pub fn format_price(won: u64) -> String {
    let digits = won.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('₩');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Text bar like `████░░░░ 50%`.
pub fn progress_bar(percent: u16, width: u16, theme: &Theme) -> Line<'static> {
    let percent = percent.min(100);
    let bar_width = width.saturating_sub(5);
    let filled = (u32::from(bar_width) * u32::from(percent) / 100) as usize;
    let empty = usize::from(bar_width).saturating_sub(filled);
    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(theme.progress_fill)),
        Span::styled("░".repeat(empty), theme.disabled()),
        Span::styled(format!("{percent:>4}%"), theme.text()),
    ])
}

/// Write `lines` top to bottom, clipped to `area`.
pub fn write_lines(area: Rect, buf: &mut Buffer, lines: &[Line<'_>]) {
    for (offset, line) in lines.iter().enumerate().take(usize::from(area.height)) {
        buf.set_line(area.x, area.y + offset as u16, line, area.width);
    }
}

/// Page heading with a one-line description.
pub struct PageHeading {
    title: &'static str,
    description: &'static str,
}

impl PageHeading {
    pub fn new(title: &'static str, description: &'static str) -> Self {
        Self { title, description }
    }
}

impl Section for PageHeading {
    fn title(&self) -> &'static str {
        self.title
    }

    fn height(&self, _width: u16) -> u16 {
        3
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let lines = vec![
            Line::from(Span::styled(
                self.title,
                ctx.theme.title().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(Span::styled(self.description, ctx.theme.text_dim())),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(area, buf);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Group heading separating clusters of cards on a page.
pub struct GroupHeading {
    title: &'static str,
    subtitle: &'static str,
}

impl GroupHeading {
    pub fn new(title: &'static str, subtitle: &'static str) -> Self {
        Self { title, subtitle }
    }
}

impl Section for GroupHeading {
    fn title(&self) -> &'static str {
        self.title
    }

    fn height(&self, _width: u16) -> u16 {
        2
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let rule = "─".repeat(usize::from(area.width).saturating_sub(self.title.chars().count() + 3));
        write_lines(
            area,
            buf,
            &[
                Line::from(vec![
                    Span::styled(format!("{} ", self.title), ctx.theme.title()),
                    Span::styled(rule, ctx.theme.border()),
                ]),
                Line::from(Span::styled(self.subtitle, ctx.theme.text_dim())),
            ],
        );
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
