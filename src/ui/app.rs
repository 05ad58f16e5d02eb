use crate::sync::{
    SyncCommand, SyncCommandSender, SyncEvent, CREATE_FAILURE_MESSAGE, DELETE_FAILURE_MESSAGE,
    LOAD_FAILURE_MESSAGE,
};
use crate::telemetry::{SortKey, TelemetryRecord};
use crate::ui::confirm::{ConfirmDialogState, ConfirmIntent, ConfirmReducer};
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState, DashboardView};
use crate::ui::form::{FormIntent, FormReducer, FormState};
use crate::ui::mvi::Reducer;
use chrono::Utc;

/// Which panel receives plain key presses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    #[default]
    Table,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Collection URL shown in the header.
    endpoint: String,
    /// Data Store and View State (MVI pattern).
    dashboard: DashboardState,
    /// Draft being edited (MVI pattern).
    form: FormState,
    /// Pending delete confirmation (MVI pattern).
    confirm: ConfirmDialogState,
    /// One-shot notice; the next key press dismisses it.
    alert: Option<String>,
    /// Row index into the sorted view.
    selected: usize,
    tick: usize,
    command_sender: Option<SyncCommandSender>,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Table,
            endpoint: endpoint.into(),
            dashboard: DashboardState::default(),
            form: FormState::default(),
            confirm: ConfirmDialogState::default(),
            alert: None,
            selected: 0,
            tick: 0,
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn confirm_dialog(&self) -> &ConfirmDialogState {
        &self.confirm
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn set_command_sender(&mut self, sender: SyncCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Advances the loading animation.
    pub fn on_tick(&mut self) {
        if self.dashboard.loading {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    // ========================================================================
    // Table operations
    // ========================================================================

    /// Manual refresh (header button / retry link).
    pub fn request_refresh(&mut self) -> bool {
        self.send_command(SyncCommand::Load)
    }

    /// Column header activation.
    pub fn sort_by(&mut self, key: SortKey) {
        self.dispatch_dashboard(DashboardIntent::SortBy(key));
        self.selected = 0;
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.dashboard.records.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            current.saturating_sub(1)
        } else {
            (current + 1).min(len - 1)
        };
    }

    /// Record under the cursor, only while the table is on screen.
    pub fn selected_record(&self) -> Option<&TelemetryRecord> {
        match self.dashboard.view() {
            DashboardView::Table(rows) => rows.get(self.selected).copied(),
            _ => None,
        }
    }

    /// Open the confirmation dialog for the selected row. Issues nothing.
    pub fn request_delete_selected(&mut self) -> bool {
        let Some(record) = self.selected_record() else {
            return false;
        };
        let intent = ConfirmIntent::Request {
            id: record.id.clone(),
            satellite_id: record.satellite_id.clone(),
        };
        self.dispatch_confirm(intent);
        true
    }

    /// User accepted the confirmation: the delete is issued now.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.pending_id().map(str::to_string) else {
            return false;
        };
        self.dispatch_confirm(ConfirmIntent::Dismiss);
        self.send_command(SyncCommand::Delete { id })
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_confirm(ConfirmIntent::Dismiss);
    }

    // ========================================================================
    // Form operations
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Validate the draft and, if it passes, issue the create.
    ///
    /// A failing check shows exactly one alert and leaves the draft intact.
    pub fn submit_form(&mut self) -> bool {
        match self.form.draft.prepare(Utc::now()) {
            Ok(payload) => self.send_command(SyncCommand::Create(payload)),
            Err(err) => {
                tracing::debug!(error = %err, "Draft rejected before transmission");
                self.alert = Some(err.to_string());
                false
            }
        }
    }

    // ========================================================================
    // Sync outcomes
    // ========================================================================

    pub fn on_sync_event(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::LoadStarted => self.dispatch_dashboard(DashboardIntent::LoadStarted),
            SyncEvent::Loaded(records) => {
                self.dispatch_dashboard(DashboardIntent::Loaded {
                    records,
                    synced_at: Utc::now(),
                });
                self.clamp_selection();
            }
            SyncEvent::LoadFailed => self.dispatch_dashboard(DashboardIntent::LoadFailed {
                message: LOAD_FAILURE_MESSAGE.to_string(),
            }),
            SyncEvent::Created => self.dispatch_form(FormIntent::Reset),
            SyncEvent::CreateFailed => self.alert = Some(CREATE_FAILURE_MESSAGE.to_string()),
            SyncEvent::DeleteStarted => self.dispatch_dashboard(DashboardIntent::DeleteStarted),
            // A reload follows immediately and clears the loading flag.
            SyncEvent::Deleted => {}
            SyncEvent::DeleteFailed => {
                self.dispatch_dashboard(DashboardIntent::DeleteFailed);
                self.alert = Some(DELETE_FAILURE_MESSAGE.to_string());
            }
        }
    }

    fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    fn clamp_selection(&mut self) {
        let len = self.dashboard.records.len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn send_command(&mut self, command: SyncCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Sync command not queued");
                self.alert = Some(format!("Sync queue unavailable: {err}"));
                false
            }
        }
    }
}
