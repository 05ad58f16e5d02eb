use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::ConfirmDialogState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Request { id, satellite_id } => {
                ConfirmDialogState::Visible { id, satellite_id }
            }
            ConfirmIntent::Dismiss => ConfirmDialogState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(ConfirmDialogState::default(), ConfirmDialogState::Hidden);
        assert_eq!(ConfirmDialogState::Hidden.pending_id(), None);
    }

    #[test]
    fn request_then_dismiss() {
        let state = ConfirmReducer::reduce(
            ConfirmDialogState::Hidden,
            ConfirmIntent::Request {
                id: "42".to_string(),
                satellite_id: "SAT-1".to_string(),
            },
        );
        assert!(state.is_visible());
        assert_eq!(state.pending_id(), Some("42"));

        let state = ConfirmReducer::reduce(state, ConfirmIntent::Dismiss);
        assert!(!state.is_visible());
    }
}
