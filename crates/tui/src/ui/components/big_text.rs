//! Big text widget for large ASCII headers.
//!
//! A wrapper around `tui-big-text` that centers the glyphs horizontally.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use tui_big_text::{BigText, PixelSize};

#[derive(Debug, Clone)]
pub struct BigTextWidget {
    text: String,
    pixel_size: PixelSize,
    fg: Color,
}

impl BigTextWidget {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pixel_size: PixelSize::Quadrant,
            fg: Color::Cyan,
        }
    }

    pub fn pixel_size(mut self, size: PixelSize) -> Self {
        self.pixel_size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Columns and rows occupied by one glyph at the configured pixel size.
    fn cell_size(&self) -> (u16, u16) {
        match self.pixel_size {
            PixelSize::Full => (8, 8),
            PixelSize::HalfHeight => (8, 4),
            PixelSize::HalfWidth => (4, 8),
            _ => (4, 4),
        }
    }

    /// Rendered size of the text.
    pub fn size(&self) -> (u16, u16) {
        let (w, h) = self.cell_size();
        (w * self.text.chars().count() as u16, h)
    }
}

impl Widget for BigTextWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, _) = self.size();
        let x = area.x + area.width.saturating_sub(width) / 2;
        let target = Rect {
            x,
            width: area.width.saturating_sub(x - area.x),
            ..area
        };
        BigText::builder()
            .pixel_size(self.pixel_size)
            .style(Style::default().fg(self.fg))
            .lines(vec![self.text.into()])
            .build()
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_size() {
        let widget = BigTextWidget::new("SHOWCASE");
        assert_eq!(widget.size(), (32, 4));
    }

    #[test]
    fn test_renders_within_area() {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        BigTextWidget::new("UI").render(area, &mut buf);
        let painted = buf.content().iter().filter(|cell| cell.symbol() != " ").count();
        assert!(painted > 0);
    }
}
