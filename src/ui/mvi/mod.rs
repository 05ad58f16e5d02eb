//! Model-View-Intent primitives for the dashboard UI.
//!
//! ```text
//! key press / sync event ──→ Intent ──→ Reducer ──→ State ──→ render
//!          ↑                                                    │
//!          └────────────────────────────────────────────────────┘
//! ```
//!
//! Network work never happens inside a reducer; the app issues sync
//! commands and feeds their outcomes back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
