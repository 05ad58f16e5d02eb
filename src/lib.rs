pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod sync;
pub mod telemetry;
pub mod ui;
