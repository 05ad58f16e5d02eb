use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    /// Ask before deleting the given record.
    Request { id: String, satellite_id: String },
    /// Answered either way; the caller acts on the answer first.
    Dismiss,
}

impl Intent for ConfirmIntent {}
