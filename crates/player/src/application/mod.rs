//! Application layer: session state, the route guard and use-case services.

pub mod error;
pub mod route_guard;
pub mod services;
pub mod session_store;

pub use error::ServiceError;
pub use route_guard::{GuardDecision, RouteGuard};
pub use session_store::{SessionState, SessionStore, SessionUpdate};
