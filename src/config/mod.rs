//! Configuration for the dashboard.
//!
//! Settings live in a TOML file under the user's config directory. Every key
//! is optional; a missing default file yields the built-in defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
