use chrono::{DateTime, Utc};

use crate::telemetry::{SortState, TelemetryRecord};
use crate::ui::mvi::UiState;

/// View State plus the Data Store of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Records exactly as returned by the last successful read.
    pub records: Vec<TelemetryRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub sort: SortState,
    pub synced_at: Option<DateTime<Utc>>,
}

/// Starts in the loading state: a read is issued as soon as the UI is up.
impl Default for DashboardState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            sort: SortState::default(),
            synced_at: None,
        }
    }
}

impl UiState for DashboardState {}

/// What the body of the dashboard shows, in priority order.
#[derive(Debug, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Table(Vec<&'a TelemetryRecord>),
}

/// Header link indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Syncing,
    Online,
    Offline,
}

impl DashboardState {
    pub fn view(&self) -> DashboardView<'_> {
        if self.loading {
            return DashboardView::Loading;
        }
        if let Some(error) = &self.error {
            return DashboardView::Error(error);
        }
        let sorted = self.sorted();
        if sorted.is_empty() {
            DashboardView::Empty
        } else {
            DashboardView::Table(sorted)
        }
    }

    /// Sort-derived sequence; the buffer itself is never reordered.
    pub fn sorted(&self) -> Vec<&TelemetryRecord> {
        self.sort.apply(&self.records)
    }

    pub fn link_state(&self) -> LinkState {
        if self.loading {
            LinkState::Syncing
        } else if self.error.is_some() {
            LinkState::Offline
        } else {
            LinkState::Online
        }
    }
}
