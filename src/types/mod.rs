//! Shared data structures for LAS report generation
//!
//! - `las`: the loaded log (header entries, curves, depth index)
//! - `chart`: chart descriptors emitted by the curve resolver

mod chart;
mod las;

pub use chart::*;
pub use las::*;
