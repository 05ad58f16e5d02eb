use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Vehicle health reported with every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Healthy,
    Warning,
    Critical,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Healthy, Status::Warning, Status::Critical];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Healthy => "HEALTHY",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
        }
    }

    /// Next value in selection order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Status::Healthy => Status::Warning,
            Status::Warning => Status::Critical,
            Status::Critical => Status::Healthy,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Status::Healthy => Status::Critical,
            Status::Warning => Status::Healthy,
            Status::Critical => Status::Warning,
        }
    }
}

/// One telemetry sample as stored by the backend.
///
/// Instances only exist after passing [`parse_collection`]; the id is opaque
/// and is only ever echoed back for deletion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    pub id: String,
    pub satellite_id: String,
    /// Kilometres.
    pub altitude: f64,
    /// Kilometres per second.
    pub velocity: f64,
    pub status: Status,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// The collection envelope itself was unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedPayload {
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response body has no 'data' array")]
    MissingData,
}

/// Parse a `GET /telemetry` body into records.
///
/// The envelope must be an object with a `data` array. Entries that do not
/// match the record shape are logged and skipped; the rest keep their
/// backend order. Extra envelope keys (`total`, `limit`, `offset`) are ignored.
pub fn parse_collection(body: Value) -> Result<Vec<TelemetryRecord>, MalformedPayload> {
    let Value::Object(mut envelope) = body else {
        return Err(MalformedPayload::NotAnObject);
    };
    let Some(Value::Array(entries)) = envelope.remove("data") else {
        return Err(MalformedPayload::MissingData);
    };

    let total = entries.len();
    let records: Vec<TelemetryRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping malformed telemetry entry");
                None
            }
        })
        .collect();

    if records.len() != total {
        tracing::debug!(
            accepted = records.len(),
            rejected = total - records.len(),
            "Telemetry collection partially rejected"
        );
    }
    Ok(records)
}

/// Parse an ISO-8601 date-time.
///
/// Values with an offset are converted to UTC. Values without one (as written
/// by the SQLite-backed service) are taken to already be UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{raw}'")))
}
