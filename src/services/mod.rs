//! Pure service functions implementing the dashboard's temporal algorithms.
//!
//! Every function here takes all of its temporal inputs, "now" included, as
//! explicit arguments and touches no shared state.

pub mod billing;
pub mod calendar;
pub mod chart;

pub use crate::domain::types::{TemporalError, TemporalResult};
