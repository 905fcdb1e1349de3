//! Form controls: radio groups, switches, selects, date picker, file list
//! and sliders.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::pages::{Effects, KeyOutcome, Section, SectionContext};
use crate::ui::components::Slider;
use crate::ui::theme::{ThemeExt, helpers};

use super::common::{button, format_price, marker, radio, render_card, row_style, switch, write_lines};

/// `(value, label)` pairs.
type Options = &'static [(&'static str, &'static str)];

const SHIPPING: Options = &[
    ("standard", "Standard (3-5 days, free)"),
    ("express", "Express (1-2 days, ₩3,000)"),
    ("overnight", "Same day (₩5,000)"),
    ("pickup", "Store pickup (free)"),
];
const PAYMENT: Options = &[
    ("card", "Credit card"),
    ("bank", "Bank transfer"),
    ("mobile", "Mobile payment"),
];

#[derive(Debug)]
pub struct RadioSection {
    groups: [(&'static str, Options, usize); 2],
    cursor: (usize, usize),
}

impl Default for RadioSection {
    fn default() -> Self {
        Self {
            groups: [("Shipping method", SHIPPING, 0), ("Payment method", PAYMENT, 0)],
            cursor: (0, 0),
        }
    }
}

impl RadioSection {
    pub fn selected(&self, group: usize) -> &'static str {
        let (_, options, chosen) = self.groups[group];
        options[chosen].0
    }

    fn move_cursor(&mut self, down: bool) {
        let (group, index) = self.cursor;
        let len = self.groups[group].1.len();
        self.cursor = match (down, group, index) {
            (true, g, i) if i + 1 < len => (g, i + 1),
            (true, g, _) if g + 1 < self.groups.len() => (g + 1, 0),
            (false, g, i) if i > 0 => (g, i - 1),
            (false, g, _) if g > 0 => (g - 1, self.groups[g - 1].1.len() - 1),
            _ => self.cursor,
        };
    }
}

impl Section for RadioSection {
    fn title(&self) -> &'static str {
        "Radio buttons"
    }

    fn height(&self, _width: u16) -> u16 {
        let rows: usize = self.groups.iter().map(|(_, options, _)| options.len() + 1).sum();
        2 + rows as u16 + 2
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = Vec::new();
        for (group_index, (label, options, chosen)) in self.groups.iter().enumerate() {
            lines.push(Line::from(Span::styled(*label, ctx.theme.text().add_modifier(Modifier::BOLD))));
            for (index, (_, text)) in options.iter().enumerate() {
                let at_cursor = self.cursor == (group_index, index);
                lines.push(Line::from(vec![
                    Span::raw(marker(at_cursor, ctx.focused)),
                    Span::styled(format!("{} ", radio(index == *chosen)), ctx.theme.info()),
                    Span::styled(*text, row_style(at_cursor, ctx.focused, ctx.theme)),
                ]));
            }
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Selected: {} / {}", self.selected(0), self.selected(1)),
            ctx.theme.text_dim(),
        )));
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Up => self.move_cursor(false),
            KeyCode::Down => self.move_cursor(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (group, index) = self.cursor;
                self.groups[group].2 = index;
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "↑/↓ option  Space choose"
    }
}

#[derive(Debug)]
pub struct SwitchSection {
    switches: [(&'static str, &'static str, bool); 4],
    cursor: usize,
}

impl Default for SwitchSection {
    fn default() -> Self {
        Self {
            switches: [
                ("Notifications", "Get notified about new messages and updates", true),
                ("Email alerts", "Receive important information by email", false),
                ("Dark mode", "Use a dark color scheme", false),
                ("Auto-save", "Save changes automatically", true),
            ],
            cursor: 0,
        }
    }
}

impl SwitchSection {
    pub fn is_on(&self, index: usize) -> bool {
        self.switches[index].2
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

impl Section for SwitchSection {
    fn title(&self) -> &'static str {
        "Toggle switches"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 2 * self.switches.len() as u16 + 1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = Vec::new();
        for (index, (label, description, on)) in self.switches.iter().enumerate() {
            let selected = index == self.cursor;
            let knob = if *on {
                Style::default().fg(ctx.theme.success)
            } else {
                ctx.theme.disabled()
            };
            lines.push(Line::from(vec![
                Span::raw(marker(selected, ctx.focused)),
                Span::styled(format!("{} ", switch(*on)), knob),
                Span::styled(*label, row_style(selected, ctx.focused, ctx.theme)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("      {description}"),
                ctx.theme.text_dim(),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!(
                "Current: notifications {}, email alerts {}",
                on_off(self.is_on(0)),
                on_off(self.is_on(1))
            ),
            ctx.theme.info(),
        )));
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.switches.len() - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let switch = &mut self.switches[self.cursor].2;
                *switch = !*switch;
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "↑/↓ switch  Space toggle"
    }
}

const COUNTRIES: Options = &[
    ("kr", "South Korea"),
    ("us", "United States"),
    ("jp", "Japan"),
    ("cn", "China"),
    ("uk", "United Kingdom"),
    ("fr", "France"),
    ("de", "Germany"),
    ("ca", "Canada"),
    ("au", "Australia"),
];
const LANGUAGES: Options = &[
    ("ko", "한국어"),
    ("en", "English"),
    ("ja", "日本語"),
    ("zh", "中文"),
    ("es", "Español"),
];
const TIME_ZONES: Options = &[
    ("asia-seoul", "Asia/Seoul (GMT+9)"),
    ("america-new-york", "America/New York (GMT-5)"),
    ("europe-london", "Europe/London (GMT+0)"),
    ("asia-tokyo", "Asia/Tokyo (GMT+9)"),
    ("australia-sydney", "Australia/Sydney (GMT+11)"),
];

#[derive(Debug)]
struct Dropdown {
    label: &'static str,
    placeholder: &'static str,
    options: Options,
    value: Option<usize>,
}

#[derive(Debug)]
pub struct SelectSection {
    dropdowns: [Dropdown; 3],
    cursor: usize,
    /// Highlighted option while a dropdown is open.
    open: Option<usize>,
}

impl Default for SelectSection {
    fn default() -> Self {
        Self {
            dropdowns: [
                Dropdown {
                    label: "Country",
                    placeholder: "Choose a country",
                    options: COUNTRIES,
                    value: None,
                },
                Dropdown {
                    label: "Language",
                    placeholder: "",
                    options: LANGUAGES,
                    value: Some(0),
                },
                Dropdown {
                    label: "Time zone",
                    placeholder: "",
                    options: TIME_ZONES,
                    value: Some(0),
                },
            ],
            cursor: 0,
            open: None,
        }
    }
}

impl SelectSection {
    pub fn value(&self, index: usize) -> Option<&'static str> {
        let dropdown = &self.dropdowns[index];
        dropdown.value.map(|v| dropdown.options[v].0)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

impl Section for SelectSection {
    fn title(&self) -> &'static str {
        "Dropdown selects"
    }

    fn height(&self, _width: u16) -> u16 {
        let list = self
            .open
            .map_or(0, |_| self.dropdowns[self.cursor].options.len() as u16);
        2 + self.dropdowns.len() as u16 + list + 2
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = Vec::new();
        for (index, dropdown) in self.dropdowns.iter().enumerate() {
            let selected = index == self.cursor;
            let shown = match dropdown.value {
                Some(v) => Span::styled(dropdown.options[v].1, ctx.theme.text()),
                None => Span::styled(dropdown.placeholder, ctx.theme.disabled()),
            };
            lines.push(Line::from(vec![
                Span::raw(marker(selected, ctx.focused)),
                Span::styled(format!("{:<10}", dropdown.label), row_style(selected, ctx.focused, ctx.theme)),
                Span::styled("[ ", ctx.theme.border()),
                shown,
                Span::styled(if selected && self.open.is_some() { " ▴ ]" } else { " ▾ ]" }, ctx.theme.border()),
            ]));
            if selected && let Some(highlight) = self.open {
                for (option_index, (_, label)) in dropdown.options.iter().enumerate() {
                    let style = if option_index == highlight {
                        helpers::selected_style(ctx.theme)
                    } else {
                        ctx.theme.text()
                    };
                    let check = if dropdown.value == Some(option_index) { "✓ " } else { "  " };
                    lines.push(Line::from(vec![
                        Span::raw("              "),
                        Span::styled(format!("{check}{label}"), style),
                    ]));
                }
            }
        }
        lines.push(Line::default());
        if let Some(v) = self.dropdowns[0].value {
            lines.push(Line::from(Span::styled(
                format!("Selected country: {}", COUNTRIES[v].1),
                ctx.theme.info(),
            )));
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        let options = self.dropdowns[self.cursor].options.len();
        match (self.open, key.code) {
            (Some(highlight), KeyCode::Up) => self.open = Some(highlight.saturating_sub(1)),
            (Some(highlight), KeyCode::Down) => self.open = Some((highlight + 1).min(options - 1)),
            (Some(highlight), KeyCode::Enter | KeyCode::Char(' ')) => {
                self.dropdowns[self.cursor].value = Some(highlight);
                self.open = None;
            }
            (Some(_), KeyCode::Esc) => self.open = None,
            (None, KeyCode::Up) => self.cursor = self.cursor.saturating_sub(1),
            (None, KeyCode::Down) => self.cursor = (self.cursor + 1).min(self.dropdowns.len() - 1),
            (None, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.open = Some(self.dropdowns[self.cursor].value.unwrap_or(0));
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        if self.is_open() {
            "↑/↓ option  Enter pick  Esc close"
        } else {
            "↑/↓ field  Enter open"
        }
    }

    fn blur(&mut self) {
        self.open = None;
    }
}

const TIME_SLOTS: [&str; 10] = [
    "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// Month calendar with a cursor day and a time slot row.
#[derive(Debug)]
pub struct DatePickerSection {
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    time: Option<usize>,
}

impl DatePickerSection {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            cursor: today,
            selected: None,
            time: None,
        }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// `"2026-10-16 10:00"` once both parts are chosen.
    pub fn reservation(&self) -> Option<String> {
        let date = self.selected?;
        let time = TIME_SLOTS[self.time?];
        Some(format!("{} {time}", date.format("%Y-%m-%d")))
    }

    fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let Some(first) = self.cursor.with_day(1) else {
            return Vec::new();
        };
        let lead = first.weekday().num_days_from_sunday() as usize;
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut slot = lead;
        let mut day = first;
        while day.month() == first.month() {
            week[slot] = Some(day);
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        if slot > 0 {
            weeks.push(week);
        }
        weeks
    }

    fn shift_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    fn shift_months(&mut self, forward: bool) {
        let moved = if forward {
            self.cursor.checked_add_months(Months::new(1))
        } else {
            self.cursor.checked_sub_months(Months::new(1))
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }
}

impl Section for DatePickerSection {
    fn title(&self) -> &'static str {
        "Date / time picker"
    }

    fn height(&self, _width: u16) -> u16 {
        // borders + month header + weekday row + 6 weeks + gap + times + summary
        2 + 1 + 1 + 6 + 1 + 1 + 1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = vec![
            Line::from(vec![
                Span::styled("‹ ", ctx.theme.text_dim()),
                Span::styled(self.cursor.format("%B %Y").to_string(), ctx.theme.title()),
                Span::styled(" ›", ctx.theme.text_dim()),
            ]),
            Line::from(Span::styled(" Su  Mo  Tu  We  Th  Fr  Sa", ctx.theme.text_dim())),
        ];
        let weeks = self.month_grid();
        for week in &weeks {
            let mut spans = Vec::new();
            for day in week {
                match day {
                    Some(date) => {
                        let style = if *date == self.cursor && ctx.focused {
                            helpers::selected_style(ctx.theme)
                        } else if Some(*date) == self.selected {
                            ctx.theme.title()
                        } else if date.weekday() == Weekday::Sun {
                            ctx.theme.error()
                        } else {
                            ctx.theme.text()
                        };
                        spans.push(Span::styled(format!("{:>3}", date.day()), style));
                        spans.push(Span::raw(" "));
                    }
                    None => spans.push(Span::raw("    ")),
                }
            }
            lines.push(Line::from(spans));
        }
        for _ in weeks.len()..6 {
            lines.push(Line::default());
        }
        lines.push(Line::default());
        let mut times = vec![Span::styled("Time: ", ctx.theme.text_dim())];
        for (index, slot) in TIME_SLOTS.iter().enumerate() {
            let style = if self.time == Some(index) {
                helpers::primary_button_style(ctx.theme)
            } else {
                ctx.theme.text_dim()
            };
            times.push(Span::styled(*slot, style));
            times.push(Span::raw(" "));
        }
        lines.push(Line::from(times));
        lines.push(match self.reservation() {
            Some(text) => Line::from(Span::styled(format!("Reservation: {text}"), ctx.theme.success())),
            None => Line::from(Span::styled("Pick a date (Enter) and a time (t)", ctx.theme.disabled())),
        });
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Left => self.shift_days(-1),
            KeyCode::Right => self.shift_days(1),
            KeyCode::Up => self.shift_days(-7),
            KeyCode::Down => self.shift_days(7),
            KeyCode::Char('<') | KeyCode::Char(',') => self.shift_months(false),
            KeyCode::Char('>') | KeyCode::Char('.') => self.shift_months(true),
            KeyCode::Enter | KeyCode::Char(' ') => self.selected = Some(self.cursor),
            KeyCode::Char('t') => {
                self.time = Some(self.time.map_or(0, |slot| (slot + 1) % TIME_SLOTS.len()));
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "arrows day  </> month  Enter pick  t time"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: &'static str,
    pub size: u64,
    pub mime: &'static str,
}

/// Files offered by the simulated picker, in order.
const SAMPLE_FILES: [UploadedFile; 4] = [
    UploadedFile {
        name: "report.pdf",
        size: 251_187,
        mime: "application/pdf",
    },
    UploadedFile {
        name: "photo.png",
        size: 1_048_576,
        mime: "image/png",
    },
    UploadedFile {
        name: "cover.jpg",
        size: 734_003,
        mime: "image/jpeg",
    },
    UploadedFile {
        name: "intro.mp4",
        size: 5_242_880,
        mime: "video/mp4",
    },
];

fn file_icon(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "▣"
    } else if mime.starts_with("video/") {
        "▶"
    } else {
        "≡"
    }
}

#[derive(Debug, Default)]
pub struct FileUploadSection {
    files: Vec<UploadedFile>,
    next_sample: usize,
    cursor: usize,
}

impl FileUploadSection {
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }
}

impl Section for FileUploadSection {
    fn title(&self) -> &'static str {
        "File upload"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3 + SAMPLE_FILES.len() as u16
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let mut lines = vec![
            Line::from(vec![
                button("Choose file", ctx.focused, ctx.theme),
                Span::styled("  PNG, JPG, PDF supported (max 10MB)", ctx.theme.text_dim()),
            ]),
            Line::default(),
        ];
        if self.files.is_empty() {
            lines.push(Line::from(Span::styled("No files uploaded.", ctx.theme.disabled())));
        }
        for (index, file) in self.files.iter().enumerate() {
            let selected = index == self.cursor;
            lines.push(Line::from(vec![
                Span::raw(marker(selected, ctx.focused)),
                Span::styled(format!("{} ", file_icon(file.mime)), ctx.theme.info()),
                Span::styled(file.name, row_style(selected, ctx.focused, ctx.theme)),
                Span::styled(format!("  {:.1}KB", file.size as f64 / 1024.0), ctx.theme.text_dim()),
            ]));
        }
        write_lines(inner, buf, &lines);
    }

    fn handle_key(&mut self, key: KeyEvent, fx: &mut Effects) -> KeyOutcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char('a') => {
                if self.files.len() >= SAMPLE_FILES.len() {
                    fx.warning("Remove a file before adding another");
                    return KeyOutcome::Consumed;
                }
                let file = SAMPLE_FILES[self.next_sample % SAMPLE_FILES.len()].clone();
                self.next_sample += 1;
                fx.info(format!("Uploaded {}", file.name));
                self.files.push(file);
                self.cursor = self.files.len() - 1;
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.files.len().saturating_sub(1)),
            KeyCode::Char('d') | KeyCode::Delete if !self.files.is_empty() => {
                self.files.remove(self.cursor);
                self.cursor = self.cursor.min(self.files.len().saturating_sub(1));
            }
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "Enter add file  ↑/↓ select  d delete"
    }
}

#[derive(Debug)]
pub struct SliderSection {
    sliders: [Slider; 3],
    cursor: usize,
}

impl Default for SliderSection {
    fn default() -> Self {
        Self {
            sliders: [
                Slider::new(0.0, 1000.0).label("Price").value(50.0).step(10.0),
                Slider::new(0.0, 100.0)
                    .label("Volume")
                    .value(75.0)
                    .step(1.0)
                    .unit("%"),
                Slider::new(0.0, 100.0)
                    .label("Opacity")
                    .value(80.0)
                    .step(5.0)
                    .unit("%"),
            ],
            cursor: 0,
        }
    }
}

impl SliderSection {
    pub fn value(&self, index: usize) -> f64 {
        self.sliders[index].actual_value()
    }
}

impl Section for SliderSection {
    fn title(&self) -> &'static str {
        "Range sliders"
    }

    fn height(&self, _width: u16) -> u16 {
        2 + 3 * self.sliders.len() as u16 + 1
    }

    fn render(&self, area: Rect, buf: &mut Buffer, ctx: &SectionContext<'_>) {
        let inner = render_card(area, buf, self.title(), ctx);
        let rows = Layout::vertical(self.sliders.iter().map(|_| Constraint::Length(3))).split(inner);
        for (index, (slider, row)) in self.sliders.iter().zip(rows.iter()).enumerate() {
            let selected = index == self.cursor;
            let [gutter, body] =
                Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(*row);
            buf.set_string(gutter.x, gutter.y, marker(selected, ctx.focused), ctx.theme.text());
            slider.render(
                Rect { height: 2, ..body },
                buf,
                selected && ctx.focused,
                ctx.theme,
            );
        }
        let price = self.sliders[0].actual_value() as u64 * 1000;
        let summary = Line::from(Span::styled(
            format!("Price cap {}", format_price(price)),
            ctx.theme.text_dim(),
        ));
        if let Some(last) = rows.last() {
            buf.set_line(inner.x, last.bottom().min(inner.bottom().saturating_sub(1)), &summary, inner.width);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _fx: &mut Effects) -> KeyOutcome {
        let slider = &mut self.sliders[self.cursor];
        match key.code {
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor = (self.cursor + 1).min(self.sliders.len() - 1),
            KeyCode::Left | KeyCode::Char('-') => slider.decrease(),
            KeyCode::Right | KeyCode::Char('+') => slider.increase(),
            KeyCode::Home => slider.set_to_min(),
            KeyCode::End => slider.set_to_max(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    fn hints(&self) -> &'static str {
        "↑/↓ slider  ←/→ adjust  Home/End ends"
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

    fn press<S: Section>(section: &mut S, codes: &[KeyCode]) -> Effects {
        let mut fx = Effects::new(Instant::now());
        for code in codes {
            section.handle_key(key(*code), &mut fx);
        }
        fx
    }

    #[test]
    fn test_radio_cursor_crosses_groups() {
        let mut radios = RadioSection::default();
        press(&mut radios, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(radios.cursor, (1, 0));
        press(&mut radios, &[KeyCode::Down, KeyCode::Char(' ')]);
        assert_eq!(radios.selected(1), "bank");
        assert_eq!(radios.selected(0), "standard", "other group untouched");
    }

    #[test]
    fn test_switch_defaults_and_toggle() {
        let mut switches = SwitchSection::default();
        assert!(switches.is_on(0));
        assert!(!switches.is_on(1));
        press(&mut switches, &[KeyCode::Down, KeyCode::Enter]);
        assert!(switches.is_on(1));
    }

    #[test]
    fn test_select_opens_and_picks() {
        let mut selects = SelectSection::default();
        assert_eq!(selects.value(0), None);
        assert_eq!(selects.value(1), Some("ko"));
        let collapsed = selects.height(80);

        press(&mut selects, &[KeyCode::Enter]);
        assert!(selects.is_open());
        assert_eq!(selects.height(80), collapsed + COUNTRIES.len() as u16);

        press(&mut selects, &[KeyCode::Down, KeyCode::Enter]);
        assert!(!selects.is_open());
        assert_eq!(selects.value(0), Some("us"));
    }

    #[test]
    fn test_date_picker_reservation() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap_or_default();
        let mut picker = DatePickerSection::new(today);
        press(&mut picker, &[KeyCode::Right]);
        assert_eq!(picker.cursor(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default());
        assert_eq!(picker.reservation(), None);

        press(&mut picker, &[KeyCode::Enter, KeyCode::Char('t'), KeyCode::Char('t')]);
        assert_eq!(picker.reservation().as_deref(), Some("2024-02-01 10:00"));
    }

    #[test]
    fn test_month_grid_covers_every_day() {
        let picker = DatePickerSection::new(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap_or_default());
        let days: usize = picker
            .month_grid()
            .iter()
            .map(|week| week.iter().flatten().count())
            .sum();
        assert_eq!(days, 29, "leap year February");
        assert_eq!(picker.month_grid()[0][4], NaiveDate::from_ymd_opt(2024, 2, 1), "a Thursday");
    }

    #[test]
    fn test_file_list_add_and_delete() {
        let mut files = FileUploadSection::default();
        let fx = press(&mut files, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(files.files().len(), 2);
        assert_eq!(fx.actions().len(), 2);
        press(&mut files, &[KeyCode::Up, KeyCode::Char('d')]);
        assert_eq!(files.files()[0].name, "photo.png");
    }

    #[test]
    fn test_slider_defaults_and_adjust() {
        let mut sliders = SliderSection::default();
        assert_eq!(sliders.value(0), 50.0);
        assert_eq!(sliders.value(1), 75.0);
        press(&mut sliders, &[KeyCode::Right]);
        assert_eq!(sliders.value(0), 60.0);
        press(&mut sliders, &[KeyCode::Down, KeyCode::End]);
        assert_eq!(sliders.value(1), 100.0);
    }
}
