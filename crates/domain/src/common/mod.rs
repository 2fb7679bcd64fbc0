//! Common utility functions shared across the Tabletop crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod empty;

// Re-export commonly used functions at crate root for convenience
pub use empty::{is_empty, IsEmpty};
