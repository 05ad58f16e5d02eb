//! Telemetry domain types.
//!
//! - [`record`]: records as returned by the backend, validated at the boundary
//! - [`draft`]: the unsaved form draft and its pre-submit validation
//! - [`sort`]: render-time ordering of the record buffer

pub mod draft;
pub mod record;
pub mod sort;

pub use draft::{Draft, DraftField, NewTelemetry, ValidationError};
pub use record::{parse_collection, parse_timestamp, MalformedPayload, Status, TelemetryRecord};
pub use sort::{SortDirection, SortKey, SortState};
