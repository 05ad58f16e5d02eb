//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mission_control::api::HttpTelemetryApi;
use mission_control::config::ApiConfig;
use mission_control::sync::{SyncCommand, SyncEvent};
use mission_control::telemetry::{parse_timestamp, Status, TelemetryRecord};
use mission_control::ui::app::App;
use mission_control::ui::events::AppEvent;
use std::net::TcpListener;
use std::sync::mpsc;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL that refuses connections.
pub fn offline_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

pub fn api_for(base_url: &str) -> HttpTelemetryApi {
    HttpTelemetryApi::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("Failed to build API client")
}

/// Wire-format record as the service returns it.
pub fn record_json(id: &str, satellite_id: &str, altitude: f64, timestamp: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "satelliteId": satellite_id,
        "altitude": altitude,
        "velocity": 7.66,
        "status": "healthy",
        "timestamp": timestamp,
    })
}

pub fn record(id: &str, satellite_id: &str, altitude: f64, timestamp: &str) -> TelemetryRecord {
    TelemetryRecord {
        id: id.to_string(),
        satellite_id: satellite_id.to_string(),
        altitude,
        velocity: 7.66,
        status: Status::Healthy,
        timestamp: parse_timestamp(timestamp).expect("bad test timestamp"),
    }
}

/// Sync events posted so far, in order.
pub fn drain_sync_events(rx: &mpsc::Receiver<AppEvent>) -> Vec<SyncEvent> {
    rx.try_iter()
        .filter_map(|event| match event {
            AppEvent::Sync(sync) => Some(sync),
            _ => None,
        })
        .collect()
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> (App, tokio::sync::mpsc::Receiver<SyncCommand>) {
    let (tx, rx) = tokio::sync::mpsc::channel(16);
    let mut app = App::new("http://127.0.0.1:8000/telemetry");
    app.set_command_sender(tx);
    (app, rx)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press(app: &mut App, code: KeyCode) {
    mission_control::ui::input::handle_key(app, key(code));
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
