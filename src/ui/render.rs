use crate::ui::app::{App, Focus};
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::dashboard::table::render_telemetry_panel;
use crate::ui::footer::Footer;
use crate::ui::form::panel::render_form_panel;
use crate::ui::header::Header;
use crate::ui::layout::{body_columns, layout_regions};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_WARN};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Full redraw from app state. Holds no state of its own.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.endpoint()).widget(app.dashboard()), header);

    frame.render_widget(Clear, body);
    let (form_area, table_area) = body_columns(body);
    render_form_panel(frame, form_area, app.form(), app.focus() == Focus::Form);
    render_telemetry_panel(
        frame,
        table_area,
        app.dashboard(),
        app.selected(),
        app.tick(),
    );

    frame.render_widget(Footer::new(app.focus()).widget(footer), footer);

    render_confirm_dialog(frame, body, app.confirm_dialog());

    if let Some(message) = app.alert() {
        let lines = vec![
            Line::from(Span::styled(message, Style::default().fg(HEADER_TEXT))),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        PopupDialog::new("Alert", lines)
            .border_color(STATUS_WARN)
            .min_width(36)
            .render(frame, body);
    }
}
