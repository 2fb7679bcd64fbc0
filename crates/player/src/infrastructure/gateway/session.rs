//! Session gateway (`POST /auth/login`, `POST /auth/logout`)

use std::sync::Arc;

use tabletop_domain::{Email, Session};
use tabletop_shared::{status, HttpRequest, LoginRequest, ResponseEnvelope, TokenPayload};

use crate::ports::outbound::{HttpClient, RepoError, SessionRepository};

pub struct SessionGateway {
    login_url: String,
    logout_url: String,
    http: Arc<dyn HttpClient>,
}

impl SessionGateway {
    pub fn new(
        login_url: impl Into<String>,
        logout_url: impl Into<String>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            login_url: login_url.into(),
            logout_url: logout_url.into(),
            http,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl SessionRepository for SessionGateway {
    async fn login(&self, email: &Email, password: &str) -> Result<Session, RepoError> {
        let body = serde_json::to_value(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(RepoError::malformed)?;
        let response = self
            .http
            .request(HttpRequest::post(self.login_url.as_str()).with_body(body))
            .await?;

        match response.status_code {
            status::OK => {
                // A success without a token still signs in; the guard will
                // treat the empty token as signed out.
                let token = serde_json::from_value::<ResponseEnvelope<TokenPayload>>(response.body)
                    .ok()
                    .and_then(ResponseEnvelope::into_data)
                    .map(|payload| payload.access_token)
                    .unwrap_or_default();
                Ok(Session::new(email.clone(), token))
            }
            other => Err(RepoError::unexpected_status(other)),
        }
    }

    async fn logout(&self) -> Result<(), RepoError> {
        let response = self
            .http
            .request(HttpRequest::post(self.logout_url.as_str()))
            .await?;

        match response.status_code {
            status::OK => Ok(()),
            other => Err(RepoError::unexpected_status(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockHttpClient;
    use serde_json::json;
    use tabletop_shared::HttpResponse;

    const LOGIN: &str = "http://api/auth/login";
    const LOGOUT: &str = "http://api/auth/logout";

    fn email() -> Email {
        Email::new("ada@example.com").unwrap()
    }

    #[tokio::test]
    async fn login_returns_session_with_token() {
        let mut http = MockHttpClient::new();
        http.expect_request()
            .withf(|req| {
                req.url == LOGIN
                    && req.body == Some(json!({"email": "ada@example.com", "password": "pw"}))
            })
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::new(
                    200,
                    json!({"status": 200, "message": "success", "data": {"access_token": "abc"}}),
                ))
            });

        let session = SessionGateway::new(LOGIN, LOGOUT, Arc::new(http))
            .login(&email(), "pw")
            .await
            .unwrap();

        assert_eq!(session.email(), &email());
        assert_eq!(session.token(), "abc");
    }

    #[tokio::test]
    async fn login_without_token_yields_empty_token() {
        let mut http = MockHttpClient::new();
        http.expect_request()
            .returning(|_| Ok(HttpResponse::new(200, json!({"status": 200}))));

        let session = SessionGateway::new(LOGIN, LOGOUT, Arc::new(http))
            .login(&email(), "pw")
            .await
            .unwrap();
        assert!(!session.has_token());
    }

    #[tokio::test]
    async fn rejected_login_is_unexpected() {
        let mut http = MockHttpClient::new();
        http.expect_request()
            .returning(|_| Ok(HttpResponse::new(400, json!({"error": "invalid credentials"}))));

        let err = SessionGateway::new(LOGIN, LOGOUT, Arc::new(http))
            .login(&email(), "pw")
            .await
            .unwrap_err();
        assert_eq!(err, RepoError::unexpected_status(400));
    }

    #[tokio::test]
    async fn logout_posts_to_logout_url() {
        let mut http = MockHttpClient::new();
        http.expect_request()
            .withf(|req| req.url == LOGOUT && req.body.is_none())
            .times(1)
            .returning(|_| Ok(HttpResponse::new(200, json!(null))));

        SessionGateway::new(LOGIN, LOGOUT, Arc::new(http))
            .logout()
            .await
            .unwrap();
    }
}
