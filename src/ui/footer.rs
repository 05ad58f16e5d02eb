use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MISSION_BLUE};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TABLE_HINTS: &[(&str, &str)] = &[
    ("↑↓", "Select"),
    ("t/a/v", "Sort"),
    ("d", "Delete"),
    ("r", "Refresh"),
    ("Tab", "Form"),
    ("q", "Quit"),
];

const FORM_HINTS: &[(&str, &str)] = &[
    ("Tab/↑↓", "Field"),
    ("←→", "Status"),
    ("Enter", "Transmit"),
    ("Esc", "Table"),
    ("Ctrl+Q", "Quit"),
];

/// Key hints for the focused panel, version pinned to the right edge.
pub struct Footer {
    focus: Focus,
}

impl Footer {
    pub fn new(focus: Focus) -> Self {
        Self { focus }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = match self.focus {
            Focus::Table => TABLE_HINTS,
            Focus::Form => FORM_HINTS,
        };
        let key_style = Style::default().fg(MISSION_BLUE).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        for (index, (key, label)) in hints.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", text_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {label}"), text_style));
        }

        let version = format!("v{VERSION} ");
        let used: usize = spans.iter().map(Span::width).sum();
        let inner_width = usize::from(area.width.saturating_sub(2));
        let padding = inner_width.saturating_sub(used + version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
