use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::record::Status;

/// Pre-submit validation failures. Only the first failing check is reported.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Altitude/Velocity must be positive.")]
    NonPositiveMotion,
    #[error("Satellite ID is required.")]
    MissingSatelliteId,
}

/// Editable fields of the draft, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    SatelliteId,
    Altitude,
    Velocity,
    Status,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::SatelliteId,
        DraftField::Altitude,
        DraftField::Velocity,
        DraftField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::SatelliteId => "VEHICLE ID",
            DraftField::Altitude => "ALTITUDE (KM)",
            DraftField::Velocity => "VELOCITY (KM/S)",
            DraftField::Status => "HEALTH STATUS",
        }
    }

    pub fn next(self) -> Self {
        match self {
            DraftField::SatelliteId => DraftField::Altitude,
            DraftField::Altitude => DraftField::Velocity,
            DraftField::Velocity => DraftField::Status,
            DraftField::Status => DraftField::SatelliteId,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DraftField::SatelliteId => DraftField::Status,
            DraftField::Altitude => DraftField::SatelliteId,
            DraftField::Velocity => DraftField::Altitude,
            DraftField::Status => DraftField::Velocity,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DraftField::Altitude | DraftField::Velocity)
    }
}

/// In-progress record typed by the user.
///
/// Numeric fields are kept as entered and only parsed on submit, so a half
/// typed value like `"-"` or `"7."` survives between keystrokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub satellite_id: String,
    pub altitude: String,
    pub velocity: String,
    pub status: Status,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            satellite_id: String::new(),
            altitude: "0".to_string(),
            velocity: "0".to_string(),
            status: Status::Healthy,
        }
    }
}

impl Draft {
    pub fn text(&self, field: DraftField) -> &str {
        match field {
            DraftField::SatelliteId => &self.satellite_id,
            DraftField::Altitude => &self.altitude,
            DraftField::Velocity => &self.velocity,
            DraftField::Status => self.status.label(),
        }
    }

    /// Mutable text buffer of a field. `None` for the status selector.
    pub fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::SatelliteId => Some(&mut self.satellite_id),
            DraftField::Altitude => Some(&mut self.altitude),
            DraftField::Velocity => Some(&mut self.velocity),
            DraftField::Status => None,
        }
    }

    /// Validate and stamp the draft for transmission.
    ///
    /// Motion values are checked before the vehicle id. Unparseable numbers
    /// count as non-positive.
    pub fn prepare(&self, now: DateTime<Utc>) -> Result<NewTelemetry, ValidationError> {
        let altitude = parse_positive(&self.altitude);
        let velocity = parse_positive(&self.velocity);
        let (Some(altitude), Some(velocity)) = (altitude, velocity) else {
            return Err(ValidationError::NonPositiveMotion);
        };
        if self.satellite_id.trim().is_empty() {
            return Err(ValidationError::MissingSatelliteId);
        }

        Ok(NewTelemetry {
            satellite_id: self.satellite_id.clone(),
            altitude,
            velocity,
            status: self.status,
            timestamp: now,
        })
    }
}

fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

/// Body of `POST /telemetry`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTelemetry {
    pub satellite_id: String,
    pub altitude: f64,
    pub velocity: f64,
    pub status: Status,
    #[serde(serialize_with = "serialize_iso8601")]
    pub timestamp: DateTime<Utc>,
}

fn serialize_iso8601<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    fn draft(id: &str, altitude: &str, velocity: &str) -> Draft {
        Draft {
            satellite_id: id.to_string(),
            altitude: altitude.to_string(),
            velocity: velocity.to_string(),
            status: Status::Healthy,
        }
    }

    #[test]
    fn default_draft_fails_on_motion_first() {
        assert_eq!(
            Draft::default().prepare(now()),
            Err(ValidationError::NonPositiveMotion)
        );
    }

    #[test]
    fn negative_altitude_is_rejected_with_positive_message() {
        let err = draft("SAT-X", "-100", "8").prepare(now()).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveMotion);
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn zero_velocity_is_rejected() {
        assert_eq!(
            draft("SAT-X", "250", "0").prepare(now()),
            Err(ValidationError::NonPositiveMotion)
        );
    }

    #[test]
    fn unparseable_numbers_are_rejected() {
        assert_eq!(
            draft("SAT-X", "", "8").prepare(now()),
            Err(ValidationError::NonPositiveMotion)
        );
        assert_eq!(
            draft("SAT-X", "250", "-").prepare(now()),
            Err(ValidationError::NonPositiveMotion)
        );
    }

    #[test]
    fn blank_id_is_rejected_after_motion_passes() {
        let err = draft("  ", "250", "8").prepare(now()).unwrap_err();
        assert_eq!(err, ValidationError::MissingSatelliteId);
        assert!(err.to_string().contains("ID is required"));
    }

    #[test]
    fn valid_draft_produces_stamped_payload() {
        let payload = draft("SAT-X", "250", "8").prepare(now()).unwrap();
        assert_eq!(payload.satellite_id, "SAT-X");
        assert_eq!(payload.altitude, 250.0);
        assert_eq!(payload.velocity, 8.0);
        assert_eq!(payload.status, Status::Healthy);
        assert_eq!(payload.timestamp, now());
    }

    #[test]
    fn payload_serializes_with_wire_names() {
        let payload = draft("SAT-X", "250", "8.5").prepare(now()).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "satelliteId": "SAT-X",
                "altitude": 250.0,
                "velocity": 8.5,
                "status": "healthy",
                "timestamp": "2025-01-02T03:04:05.000Z"
            })
        );
    }

    #[test]
    fn field_order_wraps() {
        let mut field = DraftField::default();
        for _ in 0..DraftField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, DraftField::SatelliteId);
        assert_eq!(DraftField::SatelliteId.prev(), DraftField::Status);
    }
}
