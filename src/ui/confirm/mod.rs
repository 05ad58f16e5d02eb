mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{render_confirm_dialog, CONFIRM_PROMPT};
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::ConfirmDialogState;
