use crate::ui::confirm::state::ConfirmDialogState;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub const CONFIRM_PROMPT: &str = "Confirm deletion of telemetry record?";

pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, state: &ConfirmDialogState) {
    let ConfirmDialogState::Visible { satellite_id, .. } = state else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(CONFIRM_PROMPT, Style::default().fg(HEADER_TEXT))),
        Line::from(vec![
            Span::styled("Vehicle: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                satellite_id.as_str(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: Delete   n/Esc: Cancel",
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    PopupDialog::new("Delete Record", lines)
        .border_color(STATUS_ERROR)
        .min_width(44)
        .render(frame, area);
}
