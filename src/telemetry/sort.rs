//! Render-time ordering of the record buffer.
//!
//! Sorting never touches the stored records; [`SortState::apply`] returns a
//! fresh sequence of references into the buffer.

use std::cmp::Ordering;

use super::record::TelemetryRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Timestamp,
    Altitude,
    Velocity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Timestamp,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Column header activation: the active key toggles direction, any other
    /// key becomes active in descending order.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Descending,
            }
        }
    }

    pub fn apply<'a>(&self, records: &'a [TelemetryRecord]) -> Vec<&'a TelemetryRecord> {
        let mut view: Vec<&TelemetryRecord> = records.iter().collect();
        view.sort_by(|a, b| {
            let ordering = compare(self.key, a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        view
    }
}

/// Ascending comparator for a key: numeric for motion, chronological for time.
pub fn compare(key: SortKey, a: &TelemetryRecord, b: &TelemetryRecord) -> Ordering {
    match key {
        SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
        SortKey::Altitude => a.altitude.total_cmp(&b.altitude),
        SortKey::Velocity => a.velocity.total_cmp(&b.velocity),
    }
}
