//! Slider component for numeric input.
//!
//! Holds its value in real units and renders a one-line track plus a label.
//!
//! # Example
//!
//! ```
//! use ui_showcase::ui::components::Slider;
//!
//! let mut slider = Slider::new(0.0, 100.0).label("Volume").value(75.0).step(5.0);
//! slider.increase();
//! assert_eq!(slider.actual_value(), 80.0);
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

use showcase_config::Theme;

#[derive(Debug, Clone)]
pub struct Slider {
    value: f64,
    min: f64,
    max: f64,
    label: String,
    step: f64,
    unit: &'static str,
}

impl Slider {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            value: min,
            min,
            max,
            label: String::new(),
            step: (max - min) / 100.0,
            unit: "",
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the current value (clamped to min/max).
    pub fn value(mut self, value: f64) -> Self {
        self.set_actual_value(value);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step.max(0.0);
        self
    }

    pub fn unit(mut self, unit: &'static str) -> Self {
        self.unit = unit;
        self
    }

    pub fn actual_value(&self) -> f64 {
        self.value
    }

    /// Position in 0.0..=1.0.
    pub fn normalized_value(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        (self.value - self.min) / (self.max - self.min)
    }

    pub fn set_actual_value(&mut self, value: f64) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn increase(&mut self) {
        self.set_actual_value(self.value + self.step);
    }

    pub fn decrease(&mut self) {
        self.set_actual_value(self.value - self.step);
    }

    pub fn set_to_min(&mut self) {
        self.value = self.min;
    }

    pub fn set_to_max(&mut self) {
        self.value = self.max;
    }

    pub fn label_text(&self) -> &str {
        &self.label
    }

    fn track(&self, width: u16, focused: bool, theme: &Theme) -> Line<'static> {
        if width == 0 {
            return Line::default();
        }
        let filled = ((self.normalized_value() * f64::from(width)) as u16).min(width);
        let track_fg = if focused { theme.accent } else { theme.text_dim };

        let mut spans = Vec::new();
        if filled > 0 {
            spans.push(Span::styled(
                "━".repeat(filled as usize),
                Style::default().fg(track_fg),
            ));
        }
        if filled < width {
            spans.push(Span::styled("●", Style::default().fg(theme.accent)));
            let unfilled = width.saturating_sub(filled).saturating_sub(1);
            if unfilled > 0 {
                spans.push(Span::styled(
                    "─".repeat(unfilled as usize),
                    Style::default().fg(theme.disabled),
                ));
            }
        }
        Line::from(spans)
    }

    /// Render `label: value` on the first row and the track on the second.
    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool, theme: &Theme) {
        if area.height == 0 {
            return;
        }
        let label = Line::from(vec![
            Span::styled(format!("{}: ", self.label), Style::default().fg(theme.text)),
            Span::styled(
                format!("{:.0}{}", self.value, self.unit),
                Style::default().fg(theme.accent),
            ),
        ]);
        if area.height >= 2 {
            buf.set_line(area.x, area.y, &label, area.width);
            buf.set_line(area.x, area.y + 1, &self.track(area.width, focused, theme), area.width);
        } else {
            buf.set_line(area.x, area.y, &self.track(area.width, focused, theme), area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_value_clamping() {
        let mut slider = Slider::new(0.0, 100.0).value(150.0);
        assert_eq!(slider.actual_value(), 100.0);

        slider.set_actual_value(-50.0);
        assert_eq!(slider.actual_value(), 0.0);
    }

    #[test]
    fn test_slider_steps() {
        let mut slider = Slider::new(0.0, 100.0).value(50.0).step(10.0);
        slider.increase();
        assert_eq!(slider.actual_value(), 60.0);
        slider.decrease();
        slider.decrease();
        assert_eq!(slider.actual_value(), 40.0);
        slider.set_to_max();
        slider.increase();
        assert_eq!(slider.actual_value(), 100.0);
    }

    #[test]
    fn test_normalized_value() {
        let slider = Slider::new(0.0, 200.0).value(50.0);
        assert_eq!(slider.normalized_value(), 0.25);
    }
}
