use ratatui::style::Color;

use crate::telemetry::Status;

pub const MISSION_BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x1e, 0x29, 0x3b);
pub const HEADER_TEXT: Color = Color::Rgb(0xf1, 0xf5, 0xf9);
pub const MUTED_TEXT: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x47, 0x55, 0x69);
pub const POPUP_BORDER: Color = Color::Rgb(0xe2, 0xe8, 0xf0);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x17, 0x25, 0x54);

/// Severity colour of a status badge.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Healthy => STATUS_OK,
        Status::Warning => STATUS_WARN,
        Status::Critical => STATUS_ERROR,
    }
}
