use crate::telemetry::{Draft, DraftField};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: Draft,
    pub focused: DraftField,
}

impl UiState for FormState {}
