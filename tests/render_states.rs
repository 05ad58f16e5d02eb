//! Rendered screen for each dashboard state.

mod common;

use common::{make_app, press, record};
use crossterm::event::KeyCode;
use mission_control::sync::{SyncEvent, LOAD_FAILURE_MESSAGE};
use mission_control::ui::app::App;
use mission_control::ui::confirm::CONFIRM_PROMPT;
use mission_control::ui::dashboard::table::{EMPTY_TEXT, LOADING_TEXT, RETRY_TEXT};
use mission_control::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn initial_state_shows_loading_indicator() {
    let (app, _rx) = make_app();
    let text = screen(&app);

    assert!(text.contains("MISSION CONTROL"));
    assert!(text.contains(LOADING_TEXT));
    assert!(!text.contains("TIMESTAMP"));
}

#[test]
fn load_failure_replaces_the_table() {
    let (mut app, _rx) = make_app();
    app.on_sync_event(SyncEvent::LoadFailed);
    let text = screen(&app);

    assert!(text.contains(LOAD_FAILURE_MESSAGE));
    assert!(text.contains(RETRY_TEXT));
    assert!(!text.contains("TIMESTAMP"));
    assert!(!text.contains(EMPTY_TEXT));
}

#[test]
fn empty_buffer_shows_placeholder() {
    let (mut app, _rx) = make_app();
    app.on_sync_event(SyncEvent::Loaded(vec![]));
    let text = screen(&app);

    assert!(text.contains(EMPTY_TEXT));
    assert!(!text.contains("TIMESTAMP"));
    assert!(!text.contains(LOADING_TEXT));
}

#[test]
fn records_render_as_table() {
    let (mut app, _rx) = make_app();
    app.on_sync_event(SyncEvent::Loaded(vec![
        record("1", "SAT-ALPHA", 410.5, "2024-05-01T12:00:00Z"),
        record("2", "SAT-BRAVO", 550.0, "2024-05-02T12:00:00Z"),
    ]));
    let text = screen(&app);

    assert!(text.contains("VEHICLE"));
    assert!(text.contains("TIMESTAMP"));
    assert!(text.contains("SAT-ALPHA"));
    assert!(text.contains("SAT-BRAVO"));
    assert!(!text.contains(EMPTY_TEXT));

    let bravo = text.find("SAT-BRAVO").unwrap();
    let alpha = text.find("SAT-ALPHA").unwrap();
    assert!(bravo < alpha, "newest record first");
}

#[test]
fn confirmation_dialog_is_drawn_over_the_table() {
    let (mut app, _rx) = make_app();
    app.on_sync_event(SyncEvent::Loaded(vec![record(
        "1",
        "SAT-ALPHA",
        410.5,
        "2024-05-01T12:00:00Z",
    )]));
    press(&mut app, KeyCode::Char('d'));

    assert!(screen(&app).contains(CONFIRM_PROMPT));
}

#[test]
fn validation_alert_is_drawn() {
    let (mut app, _rx) = make_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    let text = screen(&app);

    assert!(text.contains("Alert"));
    assert!(text.contains("Altitude/Velocity must be positive."));
}
