//! Domain types for the arrivals board.
//!
//! These are the validated values the scheduler works with. Raw API
//! payloads are converted into them at the data-source boundary, so code
//! that receives an [`ArrivalList`] can rely on it being sorted.

mod arrival;
mod color;
mod status;

pub use arrival::{Arrival, ArrivalList};
pub use color::Color;
pub use status::{DisruptionStatus, Severity};
