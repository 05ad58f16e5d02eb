use crate::telemetry::DraftField;
use crate::ui::form::state::FormState;
use crate::ui::theme::{
    status_color, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MISSION_BLUE, MUTED_TEXT,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Packet injection form. The focused field is highlighted only while the
/// form owns keyboard focus.
pub fn render_form_panel(frame: &mut Frame, area: Rect, state: &FormState, has_focus: bool) {
    let mut lines = Vec::new();

    for field in DraftField::ALL {
        let active = has_focus && state.focused == field;
        lines.push(Line::from(Span::styled(
            field.label(),
            Style::default().fg(MUTED_TEXT),
        )));

        let value_style = if active {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };

        let value_line = match field {
            DraftField::Status => {
                let status = state.draft.status;
                Line::from(vec![
                    Span::styled(if active { "◀ " } else { "  " }, value_style),
                    Span::styled(
                        status.label(),
                        value_style
                            .fg(status_color(status))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(if active { " ▶" } else { "  " }, value_style),
                ])
            }
            _ => {
                let text = state.draft.text(field);
                let cursor = if active { "▏" } else { "" };
                let shown = if text.is_empty() && !active && field == DraftField::SatelliteId {
                    Span::styled("e.g. VOYAGER-1", Style::default().fg(MUTED_TEXT))
                } else {
                    Span::styled(format!("{text}{cursor}"), value_style)
                };
                Line::from(vec![Span::styled("  ", value_style), shown])
            }
        };
        lines.push(value_line);
        lines.push(Line::from(""));
    }

    let submit_style = if has_focus {
        Style::default().fg(MISSION_BLUE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    lines.push(Line::from(Span::styled("[Enter] TRANSMIT PACKET", submit_style)));

    let border = if has_focus { MISSION_BLUE } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(
            " + INJECT PACKET ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
