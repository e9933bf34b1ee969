//! TfL Unified API client.
//!
//! Two queries drive the board:
//! - `Line/{id}/Disruption` - an array of current disruptions for the line,
//!   empty when there is good service
//! - `StopPoint/{id}/Arrivals` - arrival predictions at the station, in no
//!   particular order
//!
//! Responses are parsed into typed DTOs and converted to domain types here,
//! so a malformed payload surfaces as a [`TflError`] rather than a bad row.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TflClient, TflConfig};
pub use convert::{convert_arrivals, convert_disruptions};
pub use error::TflError;
pub use mock::MockTflClient;
pub use types::{ArrivalPrediction, Disruption};
