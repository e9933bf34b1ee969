//! London Underground arrivals board.
//!
//! Polls the TfL Unified API for one line's disruption status and one
//! station's arrivals, and pages through them on a small LED-style panel
//! rendered to the terminal.

pub mod cache;
pub mod config;
pub mod display;
pub mod domain;
pub mod pager;
pub mod scheduler;
pub mod source;
pub mod tfl;
