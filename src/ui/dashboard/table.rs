use chrono::Local;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::telemetry::{SortKey, SortState, TelemetryRecord};
use crate::ui::dashboard::state::{DashboardState, DashboardView};
use crate::ui::theme::{
    status_color, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MISSION_BLUE, MUTED_TEXT,
    STATUS_ERROR,
};

pub const LOADING_TEXT: &str = "SYNCHRONIZING BUFFER...";
pub const EMPTY_TEXT: &str = "TELEMETRY BUFFER EMPTY";
pub const RETRY_TEXT: &str = "[r] RETRY LINK";

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Telemetry panel: loading indicator, error panel, placeholder or table.
pub fn render_telemetry_panel(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    selected: usize,
    tick: usize,
) {
    let block = Block::default()
        .title(Span::styled(
            " TELEMETRY ",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    match state.view() {
        DashboardView::Loading => {
            let spinner = SPINNER[tick % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(spinner, Style::default().fg(MISSION_BLUE)),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, Style::default().fg(MUTED_TEXT)),
            ]);
            render_centered(frame, area, block, vec![line]);
        }
        DashboardView::Error(message) => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("⚠ {message}"),
                    Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    RETRY_TEXT,
                    Style::default()
                        .fg(MISSION_BLUE)
                        .add_modifier(Modifier::UNDERLINED),
                )),
            ];
            render_centered(frame, area, block, lines);
        }
        DashboardView::Empty => {
            let line = Line::from(Span::styled(
                EMPTY_TEXT,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ));
            render_centered(frame, area, block, vec![line]);
        }
        DashboardView::Table(rows) => {
            let mut table_state =
                TableState::default().with_selected(Some(selected.min(rows.len() - 1)));
            let table = build_table(&rows, state.sort).block(block);
            frame.render_stateful_widget(table, area, &mut table_state);
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, block: Block<'_>, lines: Vec<Line<'_>>) {
    let inner_height = area.height.saturating_sub(2) as usize;
    let padding = inner_height.saturating_sub(lines.len()) / 2;
    let mut padded = vec![Line::from(""); padding];
    padded.extend(lines);
    frame.render_widget(
        Paragraph::new(padded)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn build_table<'a>(rows: &[&'a TelemetryRecord], sort: SortState) -> Table<'a> {
    let header_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("VEHICLE"),
        Cell::from(sortable_title("ALTITUDE", 'a', SortKey::Altitude, sort)),
        Cell::from(sortable_title("VELOCITY", 'v', SortKey::Velocity, sort)),
        Cell::from("STATUS"),
        Cell::from(sortable_title("TIMESTAMP", 't', SortKey::Timestamp, sort)),
    ])
    .style(header_style)
    .bottom_margin(1);

    let body: Vec<Row> = rows.iter().map(|record| record_row(record)).collect();

    Table::new(
        body,
        [
            Constraint::Min(12),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(10),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .column_spacing(2)
    .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
    .highlight_symbol("▶ ")
}

fn sortable_title(title: &str, key_hint: char, key: SortKey, sort: SortState) -> String {
    if sort.key == key {
        format!("{title} {}", sort.direction.arrow())
    } else {
        format!("{title} [{key_hint}]")
    }
}

fn record_row(record: &TelemetryRecord) -> Row<'static> {
    let local_time = record.timestamp.with_timezone(&Local);
    Row::new(vec![
        Cell::from(Span::styled(
            record.satellite_id.clone(),
            Style::default().fg(MISSION_BLUE),
        )),
        Cell::from(format!("{} km", record.altitude)),
        Cell::from(format!("{} km/s", record.velocity)),
        Cell::from(Span::styled(
            record.status.label(),
            Style::default()
                .fg(status_color(record.status))
                .add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            local_time.format("%H:%M:%S").to_string(),
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .style(Style::default().fg(HEADER_TEXT))
}
