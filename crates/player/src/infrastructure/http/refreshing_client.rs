//! Session-aware HTTP client
//!
//! Wraps a [`Transport`] and implements the [`HttpClient`] contract:
//!
//! - default headers and the session's bearer token go on every request
//! - any status the server answers with comes back as an [`HttpResponse`]
//! - a 401 on a first attempt triggers one credential refresh and one replay
//! - a refresh answered with 404 means the session is gone for good, and the
//!   user is sent to the sign-in page

use std::sync::Arc;

use tabletop_shared::{status, HttpRequest, HttpResponse, ResponseEnvelope, TokenPayload};

use super::refresh_gate::RefreshGate;
use crate::application::{SessionStore, SessionUpdate};
use crate::ports::outbound::{
    Attempt, HttpClient, HttpClientError, NavigationPort, RawResponse, Transport, TransportError,
};

const AUTHORIZATION: &str = "Authorization";

/// Headers sent with every request unless the caller overrides them.
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("X-Requested-With", "XMLHttpRequest"),
    ("Content-Type", "application/json"),
];

pub struct RefreshingHttpClient {
    transport: Arc<dyn Transport>,
    session: SessionStore,
    navigation: Arc<dyn NavigationPort>,
    refresh_url: String,
    refresh_gate: RefreshGate,
}

impl RefreshingHttpClient {
    /// `refresh_url` is the absolute URL of the credential refresh endpoint.
    pub fn new(
        transport: Arc<dyn Transport>,
        session: SessionStore,
        navigation: Arc<dyn NavigationPort>,
        refresh_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            session,
            navigation,
            refresh_url: refresh_url.into(),
            refresh_gate: RefreshGate::default(),
        }
    }

    fn prepare(&self, request: &HttpRequest) -> HttpRequest {
        let mut prepared = request.clone();
        for (name, value) in DEFAULT_HEADERS {
            prepared
                .headers
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
        let token = self.session.token();
        if !token.is_empty() {
            prepared
                .headers
                .entry(AUTHORIZATION.to_string())
                .or_insert_with(|| format!("Bearer {token}"));
        }
        prepared
    }

    async fn send(
        &self,
        request: &HttpRequest,
        attempt: Attempt,
    ) -> Result<RawResponse, TransportError> {
        tracing::debug!(method = %request.method, url = %request.url, ?attempt, "Sending request");
        self.transport.send(&self.prepare(request)).await
    }

    async fn execute(
        &self,
        request: &HttpRequest,
        attempt: Attempt,
    ) -> Result<RawResponse, TransportError> {
        let generation = self.refresh_gate.generation();
        match self.send(request, attempt).await {
            Err(TransportError::Status(rejected))
                if rejected.status == status::UNAUTHORIZED && attempt == Attempt::Initial =>
            {
                match self.refresh(generation).await {
                    Ok(()) => self.send(request, Attempt::Retry).await,
                    Err(e) => {
                        tracing::warn!(error = %e, url = %request.url, "Credential refresh failed");
                        if e.status() == Some(status::NOT_FOUND) {
                            self.navigation.redirect_to_login();
                        }
                        Err(TransportError::Status(rejected))
                    }
                }
            }
            outcome => outcome,
        }
    }

    async fn refresh(&self, observed: u64) -> Result<(), TransportError> {
        self.refresh_gate
            .run(observed, || async {
                let raw = self
                    .send(&HttpRequest::post(self.refresh_url.as_str()), Attempt::Initial)
                    .await?;
                if let Some(token) = refreshed_token(raw.data) {
                    self.session.set_session(SessionUpdate::token(token));
                }
                tracing::debug!("Credentials refreshed");
                Ok(())
            })
            .await
    }
}

fn refreshed_token(body: serde_json::Value) -> Option<String> {
    serde_json::from_value::<ResponseEnvelope<TokenPayload>>(body)
        .ok()?
        .into_data()
        .map(|payload| payload.access_token)
        .filter(|token| !token.is_empty())
}

fn normalize(outcome: Result<RawResponse, TransportError>) -> Result<HttpResponse, HttpClientError> {
    match outcome {
        Ok(raw) | Err(TransportError::Status(raw)) => Ok(HttpResponse::new(raw.status, raw.data)),
        Err(TransportError::Network(message)) => Err(HttpClientError::Network(message)),
        Err(TransportError::Decode(message)) => Err(HttpClientError::Decode(message)),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl HttpClient for RefreshingHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError> {
        normalize(self.execute(&request, Attempt::Initial).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorageProvider;
    use crate::ports::outbound::{MockNavigationPort, MockTransport};
    use mockall::Sequence;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const USERS: &str = "http://api/user";
    const REFRESH: &str = "http://api/auth/refresh";

    fn session_with_token(token: &str) -> SessionStore {
        let session = SessionStore::new(Arc::new(MemoryStorageProvider::new()));
        if !token.is_empty() {
            session.set_session(SessionUpdate::token(token));
        }
        session
    }

    fn no_redirect() -> MockNavigationPort {
        let mut navigation = MockNavigationPort::new();
        navigation.expect_redirect_to_login().times(0);
        navigation
    }

    fn client(
        transport: impl Transport + 'static,
        navigation: MockNavigationPort,
        session: SessionStore,
    ) -> RefreshingHttpClient {
        RefreshingHttpClient::new(Arc::new(transport), session, Arc::new(navigation), REFRESH)
    }

    fn rejected(status: u16, data: serde_json::Value) -> TransportError {
        TransportError::Status(RawResponse::new(status, data))
    }

    #[tokio::test]
    async fn success_maps_to_status_and_body() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, json!({"data": {"users": []}}))));

        let response = client(transport, no_redirect(), session_with_token(""))
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::new(200, json!({"data": {"users": []}})));
    }

    #[tokio::test]
    async fn rejected_status_is_a_response() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(rejected(500, json!("error"))));

        let response = client(transport, no_redirect(), session_with_token(""))
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, json!("error"));
    }

    #[tokio::test]
    async fn network_failure_is_an_error() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(TransportError::Network("connection refused".into())));

        let err = client(transport, no_redirect(), session_with_token(""))
            .request(HttpRequest::get(USERS))
            .await
            .unwrap_err();

        assert_eq!(err, HttpClientError::Network("connection refused".into()));
    }

    #[tokio::test]
    async fn attaches_default_headers_and_bearer_token() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.headers.get("X-Requested-With").map(String::as_str) == Some("XMLHttpRequest")
                    && req.headers.get("Content-Type").map(String::as_str)
                        == Some("application/json")
                    && req.headers.get("Authorization").map(String::as_str) == Some("Bearer t")
                    && req.headers.get("X-Trace").map(String::as_str) == Some("1")
            })
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, json!(null))));

        client(transport, no_redirect(), session_with_token("t"))
            .request(HttpRequest::get(USERS).with_header("X-Trace", "1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn omits_bearer_token_when_signed_out() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| !req.headers.contains_key("Authorization"))
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, json!(null))));

        client(transport, no_redirect(), session_with_token(""))
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unauthorized_refreshes_then_replays_once() {
        let mut seq = Sequence::new();
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == USERS)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(rejected(401, json!({"message": "expired"}))));
        transport
            .expect_send()
            .withf(|req| req.url == REFRESH)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(RawResponse::new(
                    200,
                    json!({"status": 200, "message": "success", "data": {"access_token": "fresh"}}),
                ))
            });
        transport
            .expect_send()
            .withf(|req| {
                req.url == USERS
                    && req.headers.get("Authorization").map(String::as_str) == Some("Bearer fresh")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(RawResponse::new(200, json!({"ok": true}))));

        let session = session_with_token("stale");
        let response = client(transport, no_redirect(), session.clone())
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::new(200, json!({"ok": true})));
        assert_eq!(session.token(), "fresh");
    }

    #[tokio::test]
    async fn unauthorized_replay_is_returned_without_second_refresh() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == USERS)
            .times(2)
            .returning(|_| Err(rejected(401, json!("unauthorized"))));
        transport
            .expect_send()
            .withf(|req| req.url == REFRESH)
            .times(1)
            .returning(|_| Ok(RawResponse::new(200, json!(null))));

        let response = client(transport, no_redirect(), session_with_token("stale"))
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::new(401, json!("unauthorized")));
    }

    #[tokio::test]
    async fn refresh_not_found_redirects_and_returns_original_rejection() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == USERS)
            .times(1)
            .returning(|_| Err(rejected(401, json!({"message": "expired"}))));
        transport
            .expect_send()
            .withf(|req| req.url == REFRESH)
            .times(1)
            .returning(|_| Err(rejected(404, json!("not found"))));

        let mut navigation = MockNavigationPort::new();
        navigation.expect_redirect_to_login().times(1).return_const(());

        let session = session_with_token("stale");
        let response = client(transport, navigation, session.clone())
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();

        assert_eq!(response, HttpResponse::new(401, json!({"message": "expired"})));
        assert_eq!(session.token(), "stale");
    }

    #[tokio::test]
    async fn other_refresh_failures_do_not_redirect() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| req.url == USERS)
            .times(1)
            .returning(|_| Err(rejected(401, json!("unauthorized"))));
        transport
            .expect_send()
            .withf(|req| req.url == REFRESH)
            .times(1)
            .returning(|_| Err(rejected(500, json!("boom"))));

        let response = client(transport, no_redirect(), session_with_token("stale"))
            .request(HttpRequest::get(USERS))
            .await
            .unwrap();

        assert_eq!(response.status_code, 401);
    }

    /// Holds the first two user requests until both are in flight, so both
    /// see the same refresh generation.
    struct ConcurrentUnauthorized {
        barrier: tokio::sync::Barrier,
        user_calls: AtomicUsize,
        refresh_calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Transport for ConcurrentUnauthorized {
        async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
            if request.url == REFRESH {
                self.refresh_calls.fetch_add(1, Ordering::SeqCst);
                return Ok(RawResponse::new(
                    200,
                    json!({"data": {"access_token": "fresh"}}),
                ));
            }
            if self.user_calls.fetch_add(1, Ordering::SeqCst) < 2 {
                self.barrier.wait().await;
                return Err(rejected(401, json!("unauthorized")));
            }
            Ok(RawResponse::new(200, json!("ok")))
        }
    }

    #[tokio::test]
    async fn concurrent_unauthorized_requests_share_one_refresh() {
        let transport = Arc::new(ConcurrentUnauthorized {
            barrier: tokio::sync::Barrier::new(2),
            user_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
        });
        let client = RefreshingHttpClient::new(
            transport.clone(),
            session_with_token("stale"),
            Arc::new(no_redirect()),
            REFRESH,
        );

        let (first, second) = tokio::join!(
            client.request(HttpRequest::get(USERS)),
            client.request(HttpRequest::get(USERS)),
        );

        assert_eq!(first.unwrap().status_code, 200);
        assert_eq!(second.unwrap().status_code, 200);
        assert_eq!(transport.refresh_calls.load(Ordering::SeqCst), 1);
        assert_eq!(transport.user_calls.load(Ordering::SeqCst), 4);
    }
}
