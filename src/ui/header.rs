use crate::ui::dashboard::{DashboardState, LinkState};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MISSION_BLUE, MUTED_TEXT, STATUS_ERROR,
    STATUS_OK, STATUS_WARN,
};
use chrono::Local;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "MISSION CONTROL";
pub const SUBTITLE: &str = "SATELLITE GROUND SEGMENT // LIVE MONITOR";

pub struct Header<'a> {
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    pub fn widget(&self, state: &DashboardState) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (link_label, link_color) = match state.link_state() {
            LinkState::Syncing => ("SYNCING", STATUS_WARN),
            LinkState::Online => ("ONLINE", STATUS_OK),
            LinkState::Offline => ("OFFLINE", STATUS_ERROR),
        };
        let synced = state
            .synced_at
            .map(|ts| ts.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());

        let title = Line::from(vec![
            Span::styled("  🛰  ", Style::default().fg(MISSION_BLUE)),
            Span::styled(TITLE, text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("● ", Style::default().fg(link_color)),
            Span::styled(link_label, Style::default().fg(link_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} records", state.records.len()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("last sync {synced}"), text_style),
        ]);
        let subtitle = Line::from(vec![
            Span::styled("      ", text_style),
            Span::styled(SUBTITLE, Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint.to_string(), Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(vec![title, subtitle]).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
