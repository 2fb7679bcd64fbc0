//! Composition root: wires adapters into services.

use std::sync::Arc;

use crate::application::services::{GameService, RegistrationService, SessionService, UserService};
use crate::application::{RouteGuard, SessionStore};
use crate::config::ClientConfig;
use crate::infrastructure::gateway::{GameGateway, RegistrationGateway, SessionGateway, UserGateway};
use crate::infrastructure::http::{RefreshingHttpClient, ReqwestTransport};
use crate::infrastructure::navigation::LoginRedirects;
use crate::ports::outbound::{HttpClient, StorageProvider, Transport};

/// Build the service bundle over an arbitrary transport and storage.
pub fn build_services(
    config: &ClientConfig,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn StorageProvider>,
) -> crate::ui::Services {
    let session = SessionStore::new(storage);
    let login_redirects = Arc::new(LoginRedirects::new());

    let http: Arc<dyn HttpClient> = Arc::new(RefreshingHttpClient::new(
        transport,
        session.clone(),
        login_redirects.clone(),
        config.endpoint("/auth/refresh"),
    ));

    let registration = RegistrationGateway::new(config.endpoint("/registration"), http.clone());
    let sessions = SessionGateway::new(
        config.endpoint("/auth/login"),
        config.endpoint("/auth/logout"),
        http.clone(),
    );
    let users = UserGateway::new(config.endpoint("/user"), http.clone());
    let games = GameGateway::new(config.endpoint("/game"), http);

    crate::ui::Services {
        guard: RouteGuard::new(session.clone()),
        registration: Arc::new(RegistrationService::new(Arc::new(registration))),
        sessions: Arc::new(SessionService::new(Arc::new(sessions), session.clone())),
        users: Arc::new(UserService::new(Arc::new(users))),
        games: Arc::new(GameService::new(Arc::new(games))),
        login_redirects,
        session,
    }
}

/// Production wiring: reqwest transport and the target's persistent storage.
pub fn default_services(config: &ClientConfig) -> crate::ui::Services {
    build_services(
        config,
        Arc::new(ReqwestTransport::new(config.request_timeout)),
        crate::infrastructure::storage::create_storage(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::GuardDecision;
    use crate::infrastructure::storage::MemoryStorageProvider;
    use crate::ports::outbound::{MockTransport, RawResponse, TransportError};
    use futures_util::StreamExt;
    use serde_json::json;
    use tabletop_domain::Page;

    #[tokio::test]
    async fn login_flow_updates_guard_and_authorizes_later_calls() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == "http://localhost:8080/api/v1/auth/login")
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, json!({"data": {"access_token": "abc"}}))));
        transport
            .expect_send()
            .withf(|req| {
                req.url == "http://localhost:8080/api/v1/game"
                    && req.headers.get("Authorization").map(String::as_str) == Some("Bearer abc")
            })
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, json!({"data": {"games": []}}))));

        let services = build_services(
            &ClientConfig::default(),
            Arc::new(transport),
            Arc::new(MemoryStorageProvider::new()),
        );
        assert_eq!(services.guard.check(), GuardDecision::Redirect("/signin"));

        services.sessions.login("ada@example.com", "pw").await.unwrap();
        assert_eq!(services.guard.check(), GuardDecision::Allow);

        let games = services.games.list(Page::default()).await.unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn expired_session_redirects_through_channel() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url.ends_with("/user/me"))
            .times(1)
            .returning(|_| Err(TransportError::Status(RawResponse::new(401, json!(null)))));
        transport
            .expect_send()
            .withf(|req| req.url.ends_with("/auth/refresh"))
            .times(1)
            .returning(|_| Err(TransportError::Status(RawResponse::new(404, json!(null)))));

        let services = build_services(
            &ClientConfig::default(),
            Arc::new(transport),
            Arc::new(MemoryStorageProvider::new()),
        );
        let mut redirects = services.login_redirects.take_receiver().unwrap();

        assert!(services.users.profile().await.is_err());
        assert!(redirects.next().await.is_some());
    }
}
