//! HTTP access to the telemetry service.
//!
//! [`TelemetryApi`] is the seam between the sync controller and the network;
//! [`HttpTelemetryApi`] is the reqwest implementation bound to a configured
//! base URL.

mod client;
mod error;

pub use client::{HttpTelemetryApi, TelemetryApi, COLLECTION_PATH};
pub use error::ApiError;
