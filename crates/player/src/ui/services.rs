//! Service bundle provided to components through Dioxus context.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::application::services::{GameService, RegistrationService, SessionService, UserService};
use crate::application::{RouteGuard, SessionStore};
use crate::infrastructure::navigation::LoginRedirects;

/// Everything the pages need, built once by the composition root.
#[derive(Clone)]
pub struct Services {
    pub session: SessionStore,
    pub guard: RouteGuard,
    /// Redirect requests raised by the HTTP layer.
    pub login_redirects: Arc<LoginRedirects>,
    pub registration: Arc<RegistrationService>,
    pub sessions: Arc<SessionService>,
    pub users: Arc<UserService>,
    pub games: Arc<GameService>,
}

/// Hook to access the service bundle from Dioxus context
pub fn use_services() -> Services {
    use_context::<Services>()
}
