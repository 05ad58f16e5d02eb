use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible { id: String, satellite_id: String },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Id awaiting confirmation, if the dialog is open.
    pub fn pending_id(&self) -> Option<&str> {
        match self {
            Self::Visible { id, .. } => Some(id.as_str()),
            Self::Hidden => None,
        }
    }
}
