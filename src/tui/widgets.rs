//! Custom widgets for the game UI

use crate::game::verdict::REQUIRED_CLUES;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// One tally row: suspect name, a bar of marks and the count
pub struct EvidenceMeter {
    suspect: String,
    count: u32,
    threshold: u32,
}

impl EvidenceMeter {
    pub fn new(suspect: &str, count: u32) -> Self {
        Self {
            suspect: suspect.to_string(),
            count,
            threshold: REQUIRED_CLUES,
        }
    }
}

impl Widget for EvidenceMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 8 || area.height < 1 {
            return;
        }

        // Enough marks to accuse turns the row green
        let color = if self.count >= self.threshold {
            Color::Green
        } else {
            Color::Yellow
        };

        let label_width = (area.width / 2).min(18);
        let label: String = self.suspect.chars().take(label_width as usize).collect();
        buf.set_string(area.x, area.y, &label, Style::default().fg(Color::White));

        let count_text = format!(" {}", self.count);
        let bar_start = area.x + label_width + 1;
        let bar_width = area
            .width
            .saturating_sub(label_width + 1 + count_text.len() as u16);

        let slots = self.count.max(self.threshold) as u16;
        for i in 0..bar_width.min(slots) {
            let (symbol, style) = if (i as u32) < self.count {
                ("■", Style::default().fg(color))
            } else {
                ("□", Style::default().fg(Color::DarkGray))
            };
            buf.set_string(bar_start + i, area.y, symbol, style);
        }
        buf.set_string(
            bar_start + bar_width.min(slots),
            area.y,
            &count_text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );
    }
}

/// Double-bordered box for the verdict
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }
        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(area.x, bottom, "╚", style);
        buf.set_string(right, bottom, "╝", style);

        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        if title_width < area.width {
            let start = area.x + (area.width - title_width) / 2;
            buf.set_string(start, area.y, &title, style.add_modifier(Modifier::BOLD));
        }

        let inner_width = area.width.saturating_sub(4) as usize;
        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            let text: String = line.chars().take(inner_width).collect();
            buf.set_string(area.x + 2, y, &text, Style::default().fg(Color::White));
        }
    }
}
