/// Marker trait for UI state.
///
/// `Default` is the state at startup, `PartialEq` lets tests compare whole
/// states after a sequence of intents.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
