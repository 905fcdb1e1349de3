//! Data display: a searchable, filterable, sortable table and two charts.
//!
//! Invariants:
//! - Sorting the same column again flips direction; a new column starts
//!   ascending.
//! - The filter and the search query combine with AND.

use std::cmp::Ordering;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Cell, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::ui::theme::ThemeExt;

use super::common::{button, progress_bar, render_card, write_lines};
use super::text_field::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
    Pending,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub status: Status,
    pub joined: &'static str,
    pub salary: u32,
}

pub static PEOPLE: [Person; 6] = [
    Person {
        id: 1,
        name: "Kim Cheolsu",
        email: "kim@example.com",
        role: "Developer",
        status: Status::Active,
        joined: "2023-01-15",
        salary: 5500,
    },
    Person {
        id: 2,
        name: "Lee Younghee",
        email: "lee@example.com",
        role: "Designer",
        status: Status::Active,
        joined: "2023-02-20",
        salary: 5000,
    },
    Person {
        id: 3,
        name: "Park Minsu",
        email: "park@example.com",
        role: "Manager",
        status: Status::Inactive,
        joined: "2022-11-10",
        salary: 6000,
    },
    Person {
        id: 4,
        name: "Choi Jiyeon",
        email: "choi@example.com",
        role: "Developer",
        status: Status::Active,
        joined: "2023-03-05",
        salary: 5200,
    },
    Person {
        id: 5,
        name: "Jang Donggun",
        email: "jang@example.com",
        role: "Designer",
        status: Status::Pending,
        joined: "2023-04-12",
        salary: 4800,
    },
    Person {
        id: 6,
        name: "Hong Gildong",
        email: "hong@example.com",
        role: "Developer",
        status: Status::Active,
        joined: "2023-01-28",
        salary: 5800,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    Email,
    Role,
    Status,
    Joined,
    Salary,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Name,
        Column::Email,
        Column::Role,
        Column::Status,
        Column::Joined,
        Column::Salary,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
            Self::Joined => "Joined",
            Self::Salary => "Salary",
        }
    }

    fn compare(self, a: &Person, b: &Person) -> Ordering {
        match self {
            Self::Name => a.name.cmp(b.name),
            Self::Email => a.email.cmp(b.email),
            Self::Role => a.role.cmp(b.role),
            Self::Status => a.status.label().cmp(b.status.label()),
            Self::Joined => a.joined.cmp(b.joined),
            Self::Salary => a.salary.cmp(&b.salary),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Which rows the status filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Status::Active),
            Self::Only(Status::Active) => Self::Only(Status::Inactive),
            Self::Only(Status::Inactive) => Self::Only(Status::Pending),
            Self::Only(Status::Pending) => Self::All,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }

    fn keeps(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Table query state: search text, status filter and sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub filter: StatusFilter,
    pub sort: Option<(Column, SortDirection)>,
}

impl TableQuery {
    /// Sort by `column`, flipping direction when it is already the sort column.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                Some((column, SortDirection::Descending))
            }
            Some((current, SortDirection::Descending)) if current == column => {
                Some((column, SortDirection::Ascending))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn apply(&self, people: &'static [Person]) -> Vec<&'static Person> {
        let needle = self.search.to_lowercase();
        let mut rows: Vec<_> = people
            .iter()
            .filter(|person| {
                let matches = needle.is_empty()
                    || person.name.to_lowercase().contains(&needle)
                    || person.email.to_lowercase().contains(&needle)
                    || person.role.to_lowercase().contains(&needle);
                matches && self.filter.keeps(person.status)
            })
            .collect();
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }
}

#[derive(Debug)]
pub struct DataTableSection {
    search: TextField,
    editing: bool,
    query: TableQuery,
    column: usize,
    row: usize,
}

impl Default for DataTableSection {
    fn default() -> Self {
        Self {
            search: TextField::new("Search name, email or role..."),
            editing: false,
            query: TableQuery::default(),
            column: 0,
            row: 0,
        }
    }
}

impl DataTableSection {
    pub fn rows(&self) -> Vec<&'static Person> {
        self.query.apply(&PEOPLE)
    }

    pub fn query(&self) -> &TableQuery {
        &self.query
    }

    fn sync_search(&mut self) {
        self.query.search = self.search.value().to_string();
        self.row = 0;
    }
}

impl Section for DataTableSection {
    fn title(&self) -> &'static str {
        "Data table"
    }

    fn height(&self, _width: u16) -> u16 {
        // borders + search + controls + header + rows
        2 + 2 + 1 + PEOPLE.len() as u16 + 1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let [search_area, controls_area, table_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        self.search
            .render(search_area, buf, "⌕", self.editing && ctx.focused, ctx.theme);
        let sort_label = match self.query.sort {
            Some((column, SortDirection::Ascending)) => format!("{} ↑", column.header()),
            Some((column, SortDirection::Descending)) => format!("{} ↓", column.header()),
            None => "none".to_string(),
        };
        let controls = Line::from(vec![
            button(&format!("Status: {}", self.query.filter.label()), false, ctx.theme),
            Span::styled(format!("  sort: {sort_label}"), ctx.theme.text_dim()),
        ]);
        buf.set_line(controls_area.x, controls_area.y, &controls, controls_area.width);

        let header = Row::new(Column::ALL.iter().enumerate().map(|(index, column)| {
            let mut text = column.header().to_string();
            if let Some((sorted, direction)) = self.query.sort
                && sorted == *column
            {
                text.push_str(match direction {
                    SortDirection::Ascending => " ↑",
                    SortDirection::Descending => " ↓",
                });
            }
            let style = if ctx.focused && !self.editing && index == self.column {
                ctx.theme.highlight()
            } else {
                ctx.theme.table_header()
            };
            Cell::from(text).style(style)
        }));

        let rows: Vec<Row> = self
            .rows()
            .into_iter()
            .map(|person| {
                let status_style = match person.status {
                    Status::Active => ctx.theme.success(),
                    Status::Inactive => ctx.theme.disabled(),
                    Status::Pending => ctx.theme.warning(),
                };
                Row::new(vec![
                    Cell::from(person.name),
                    Cell::from(person.email),
                    Cell::from(person.role),
                    Cell::from(Span::styled(person.status.label(), status_style)),
                    Cell::from(person.joined),
                    Cell::from(format!("{}", person.salary)),
                ])
            })
            .collect();
        let empty = rows.is_empty();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(20),
                Constraint::Percentage(24),
                Constraint::Percentage(14),
                Constraint::Percentage(12),
                Constraint::Percentage(16),
                Constraint::Percentage(14),
            ],
        )
        .header(header)
        .row_highlight_style(ctx.theme.highlight());

        let mut state = TableState::default();
        if ctx.focused && !empty {
            state.select(Some(self.row));
        }
        StatefulWidget::render(table, table_area, buf, &mut state);
        if empty {
            let y = table_area.y.saturating_add(1);
            if y < table_area.bottom() {
                buf.set_string(table_area.x, y, "No matching rows.", ctx.theme.disabled());
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        if self.editing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.editing = false,
                KeyCode::Tab | KeyCode::BackTab => {
                    self.editing = false;
                    return KeyOutcome::Ignored;
                }
                _ => {
                    if self.search.handle_key(key) {
                        self.sync_search();
                    }
                }
            }
            return KeyOutcome::Consumed;
        }
        let visible = self.rows().len();
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') => self.editing = true,
            KeyCode::Char('f') => {
                self.query.filter = self.query.filter.next();
                self.row = 0;
            }
            KeyCode::Left => self.column = self.column.saturating_sub(1),
            KeyCode::Right => self.column = (self.column + 1).min(Column::ALL.len() - 1),
            KeyCode::Enter | KeyCode::Char('s') => self.query.toggle_sort(Column::ALL[self.column]),
            KeyCode::Up => self.row = self.row.saturating_sub(1),
            KeyCode::Down => self.row = (self.row + 1).min(visible.saturating_sub(1)),
            KeyCode::Char('x') => {
                self.search.clear();
                self.sync_search();
                self.query.filter = StatusFilter::All;
                self.query.sort = None;
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn captures_text(&self) -> bool {
        self.editing
    }

    fn hints(&self) -> &'static str {
        if self.editing {
            "type to filter  Enter/Esc done"
        } else {
            "/ search  f status  ←/→ column  Enter sort  x reset"
        }
    }

    fn blur(&mut self) {
        self.editing = false;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MonthlyFigures {
    pub month: &'static str,
    pub sales: u64,
    pub revenue: u64,
    pub users: u64,
}

pub const MONTHLY: [MonthlyFigures; 6] = [
    MonthlyFigures {
        month: "1",
        sales: 4000,
        revenue: 2400,
        users: 240,
    },
    MonthlyFigures {
        month: "2",
        sales: 3000,
        revenue: 1398,
        users: 221,
    },
    MonthlyFigures {
        month: "3",
        sales: 2000,
        revenue: 9800,
        users: 229,
    },
    MonthlyFigures {
        month: "4",
        sales: 2780,
        revenue: 3908,
        users: 200,
    },
    MonthlyFigures {
        month: "5",
        sales: 1890,
        revenue: 4800,
        users: 218,
    },
    MonthlyFigures {
        month: "6",
        sales: 2390,
        revenue: 3800,
        users: 250,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Sales,
    Revenue,
    Users,
}

impl Metric {
    fn next(self) -> Self {
        match self {
            Self::Sales => Self::Revenue,
            Self::Revenue => Self::Users,
            Self::Users => Self::Sales,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Revenue => "Revenue",
            Self::Users => "Users",
        }
    }

    fn of(self, figures: &MonthlyFigures) -> u64 {
        match self {
            Self::Sales => figures.sales,
            Self::Revenue => figures.revenue,
            Self::Users => figures.users,
        }
    }
}

/// Monthly bar chart, one metric at a time.
#[derive(Debug, Default)]
pub struct ChartSection {
    metric: Metric,
}

impl ChartSection {
    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl Section for ChartSection {
    fn title(&self) -> &'static str {
        "Monthly chart"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 12
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let [tabs_area, chart_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(inner);
        let mut tabs = Vec::new();
        for metric in [Metric::Sales, Metric::Revenue, Metric::Users] {
            tabs.push(button(metric.label(), metric == self.metric, ctx.theme));
            tabs.push(Span::raw(" "));
        }
        write_lines(tabs_area, buf, &[Line::from(tabs)]);

        let bars: Vec<Bar> = MONTHLY
            .iter()
            .map(|figures| {
                Bar::default()
                    .value(self.metric.of(figures))
                    .label(Line::from(format!("M{}", figures.month)))
            })
            .collect();
        BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(6)
            .bar_gap(2)
            .bar_style(Style::default().fg(ctx.theme.accent))
            .value_style(Style::default().fg(ctx.theme.background).bg(ctx.theme.accent))
            .render(chart_area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char('v') | KeyCode::Right => self.metric = self.metric.next(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "Enter next metric"
    }
}

pub const DEVICE_SHARE: [(&str, u16); 3] = [("Desktop", 45), ("Mobile", 35), ("Tablet", 20)];

/// Device share as horizontal bars.
#[derive(Debug, Default)]
pub struct DeviceShareSection;

impl Section for DeviceShareSection {
    fn title(&self) -> &'static str {
        "Device share"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + DEVICE_SHARE.len() as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let label_width = 9;
        let lines: Vec<Line> = DEVICE_SHARE
            .iter()
            .map(|(device, share)| {
                let mut spans = vec![Span::styled(format!("{device:<label_width$}"), ctx.theme.text())];
                let bar = progress_bar(*share, inner.width.saturating_sub(label_width as u16).min(50), ctx.theme);
                spans.extend(bar.spans);
                Line::from(spans)
            })
            .collect();
        write_lines(inner, buf, &lines);
    }

    fn is_interactive(&self) -> bool {
        false
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

    fn names(rows: &[&Person]) -> Vec<&'static str> {
        rows.iter().map(|person| person.name).collect()
    }

    #[test]
    fn test_search_matches_name_email_or_role() {
        let query = TableQuery {
            search: "DESIGN".to_string(),
            ..TableQuery::default()
        };
        assert_eq!(names(&query.apply(&PEOPLE)), vec!["Lee Younghee", "Jang Donggun"]);

        let query = TableQuery {
            search: "park@".to_string(),
            ..TableQuery::default()
        };
        assert_eq!(query.apply(&PEOPLE).len(), 1);
    }

    #[test]
    fn test_filter_and_search_combine() {
        let query = TableQuery {
            search: "developer".to_string(),
            filter: StatusFilter::Only(Status::Active),
            sort: None,
        };
        assert_eq!(query.apply(&PEOPLE).len(), 3);

        let query = TableQuery {
            filter: StatusFilter::Only(Status::Pending),
            ..TableQuery::default()
        };
        assert_eq!(names(&query.apply(&PEOPLE)), vec!["Jang Donggun"]);
    }

    #[test]
    fn test_sort_toggles_on_same_column() {
        let mut query = TableQuery::default();
        query.toggle_sort(Column::Salary);
        let salaries: Vec<u32> = query.apply(&PEOPLE).iter().map(|p| p.salary).collect();
        assert_eq!(salaries.first(), Some(&4800));

        query.toggle_sort(Column::Salary);
        assert_eq!(query.sort, Some((Column::Salary, SortDirection::Descending)));
        let salaries: Vec<u32> = query.apply(&PEOPLE).iter().map(|p| p.salary).collect();
        assert_eq!(salaries.first(), Some(&6000));

        query.toggle_sort(Column::Name);
        assert_eq!(query.sort, Some((Column::Name, SortDirection::Ascending)));
    }

    #[test]
    fn test_table_section_keys() {
        let mut table = DataTableSection::default();
        let mut fx = Effects::new(Instant::now());
        table.handle_key(key(KeyCode::Char('/')), &mut fx);
        assert!(table.captures_text());
        for c in "hong".chars() {
            table.handle_key(key(KeyCode::Char(c)), &mut fx);
        }
        table.handle_key(key(KeyCode::Enter), &mut fx);
        assert_eq!(names(&table.rows()), vec!["Hong Gildong"]);

        table.handle_key(key(KeyCode::Char('x')), &mut fx);
        assert_eq!(table.rows().len(), PEOPLE.len());
        assert_eq!(table.query(), &TableQuery::default());
    }

    #[test]
    fn test_chart_cycles_metric() {
        let mut chart = ChartSection::default();
        chart.handle_key(key(KeyCode::Enter), &mut Effects::new(Instant::now()));
        assert_eq!(chart.metric(), Metric::Revenue);
    }

    #[test]
    fn test_device_share_sums_to_hundred() {
        let total: u16 = DEVICE_SHARE.iter().map(|(_, share)| share).sum();
        assert_eq!(total, 100);
    }
}
