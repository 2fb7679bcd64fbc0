//! Player port definitions.
//!
//! Only outbound ports exist: the UI drives application services directly.

pub mod outbound;
