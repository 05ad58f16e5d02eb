//! Sync controller: the only component that talks to the telemetry service.
//!
//! The UI sends [`SyncCommand`]s; a single worker task executes them one at a
//! time and reports progress back as [`SyncEvent`]s on the UI event channel.
//! Because commands run strictly in issue order, the refresh that follows the
//! most recently issued action is also the last one to land.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::sync::mpsc as async_mpsc;

use crate::api::TelemetryApi;
use crate::telemetry::{NewTelemetry, TelemetryRecord};
use crate::ui::events::AppEvent;

pub const LOAD_FAILURE_MESSAGE: &str = "Ground Station Offline: Unable to sync with fleet.";
pub const CREATE_FAILURE_MESSAGE: &str = "Transmission failed. Check backend link.";
pub const DELETE_FAILURE_MESSAGE: &str = "Failed to delete record. System link error.";

/// Bound on commands waiting for the worker.
pub const COMMAND_QUEUE_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum SyncCommand {
    /// Read the full collection.
    Load,
    /// Write an already validated record, then reload.
    Create(NewTelemetry),
    /// Remove a record the user has confirmed, then reload.
    Delete { id: String },
}

pub type SyncCommandSender = async_mpsc::Sender<SyncCommand>;

#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    LoadStarted,
    Loaded(Vec<TelemetryRecord>),
    LoadFailed,
    Created,
    CreateFailed,
    DeleteStarted,
    Deleted,
    DeleteFailed,
}

pub struct SyncController {
    api: Arc<dyn TelemetryApi>,
}

impl SyncController {
    pub fn new(api: Arc<dyn TelemetryApi>) -> Self {
        Self { api }
    }

    pub async fn execute(&self, command: SyncCommand, events: &mpsc::Sender<AppEvent>) {
        match command {
            SyncCommand::Load => self.load(events).await,
            SyncCommand::Create(payload) => self.create(payload, events).await,
            SyncCommand::Delete { id } => self.remove(&id, events).await,
        }
    }

    /// Replace the buffer with a fresh read. The loading flag is raised before
    /// the request and cleared by either outcome.
    pub async fn load(&self, events: &mpsc::Sender<AppEvent>) {
        emit(events, SyncEvent::LoadStarted);
        match self.api.list().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Telemetry buffer synchronized");
                emit(events, SyncEvent::Loaded(records));
            }
            Err(err) => {
                tracing::warn!(error = %err, unreachable = err.is_unreachable(), "Telemetry load failed");
                emit(events, SyncEvent::LoadFailed);
            }
        }
    }

    pub async fn create(&self, payload: NewTelemetry, events: &mpsc::Sender<AppEvent>) {
        match self.api.create(&payload).await {
            Ok(()) => {
                tracing::info!(satellite_id = %payload.satellite_id, "Telemetry packet transmitted");
                emit(events, SyncEvent::Created);
                self.load(events).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, satellite_id = %payload.satellite_id, "Telemetry create failed");
                emit(events, SyncEvent::CreateFailed);
            }
        }
    }

    /// Caller is responsible for having obtained confirmation.
    pub async fn remove(&self, id: &str, events: &mpsc::Sender<AppEvent>) {
        emit(events, SyncEvent::DeleteStarted);
        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Telemetry record deleted");
                emit(events, SyncEvent::Deleted);
                self.load(events).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, id, "Telemetry delete failed");
                emit(events, SyncEvent::DeleteFailed);
            }
        }
    }
}

/// Drain commands until every sender is dropped.
pub async fn run_sync_worker(
    controller: SyncController,
    mut commands: async_mpsc::Receiver<SyncCommand>,
    events: mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        controller.execute(command, &events).await;
    }
    tracing::debug!("Sync worker stopped: command channel closed");
}

fn emit(events: &mpsc::Sender<AppEvent>, event: SyncEvent) {
    if events.send(AppEvent::Sync(event)).is_err() {
        tracing::trace!("Sync event dropped (UI gone)");
    }
}
