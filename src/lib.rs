//! Pure temporal-windowing and aggregation core of the clinic dashboard.
//!
//! The surrounding application fetches records and monthly figures from the
//! backend and renders the structures produced here; this crate only performs
//! the deterministic arithmetic in between. Every function takes "now" or
//! "today" as an explicit argument and never reads a clock, so all of them can
//! be re-invoked on every render from any number of callers without
//! coordination.

pub mod domain;
pub mod pagination;
pub mod services;
