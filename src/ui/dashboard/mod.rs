mod intent;
mod reducer;
mod state;
pub mod table;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::{DashboardState, DashboardView, LinkState};
