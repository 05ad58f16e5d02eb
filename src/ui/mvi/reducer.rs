use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must be pure; side effects belong to the caller around the dispatch.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
