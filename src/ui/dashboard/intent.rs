use chrono::{DateTime, Utc};

use crate::telemetry::{SortKey, TelemetryRecord};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    LoadStarted,
    /// Successful full read; replaces the buffer verbatim.
    Loaded {
        records: Vec<TelemetryRecord>,
        synced_at: DateTime<Utc>,
    },
    /// Read failed. The previous buffer is kept.
    LoadFailed { message: String },
    DeleteStarted,
    /// Delete rejected. Buffer stays as it was before the attempt.
    DeleteFailed,
    /// Column header activation.
    SortBy(SortKey),
}

impl Intent for DashboardIntent {}
