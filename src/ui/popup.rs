use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{MISSION_BLUE, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Bordered modal sized to its content and centered over an area.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    border: Color,
    min_width: u16,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            border: POPUP_BORDER,
            min_width: 0,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let title_width = self.title.chars().count() as u16;
        let width = content_width
            .max(title_width)
            .saturating_add(4)
            .max(self.min_width);
        let height = (self.lines.len() as u16).saturating_add(2);
        let rect = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(self.title, Style::default().fg(MISSION_BLUE)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));
        frame.render_widget(
            Paragraph::new(self.lines).block(block).wrap(Wrap { trim: false }),
            rect,
        );
    }
}
