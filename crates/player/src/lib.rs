//! Tabletop Player crate.
//!
//! Browser client for the Tabletop API: registration, sign in, the user
//! directory, the signed-in profile and the game list.
//!
//! - [`ports`] - traits the application depends on
//! - [`infrastructure`] - reqwest transport, storage, gateways
//! - [`application`] - session store, route guard, use-case services
//! - [`ui`] - Dioxus router and pages
//!
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod application;
pub mod composition;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use ui::{app, Route, Services};
