//! Registration gateway (`POST /registration`)

use std::sync::Arc;

use tabletop_domain::{DomainError, Registration};
use tabletop_shared::{status, HttpRequest, RegistrationDto};

use crate::ports::outbound::{HttpClient, RegistrationRepository, RepoError};

pub fn map_to_request(registration: &Registration) -> RegistrationDto {
    RegistrationDto {
        id: registration.id().to_string(),
        email: registration.email().to_string(),
        password: registration.password().to_string(),
    }
}

pub struct RegistrationGateway {
    url: String,
    http: Arc<dyn HttpClient>,
}

impl RegistrationGateway {
    pub fn new(url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RegistrationRepository for RegistrationGateway {
    async fn register(&self, registration: &Registration) -> Result<(), RepoError> {
        let body =
            serde_json::to_value(map_to_request(registration)).map_err(RepoError::malformed)?;
        let response = self
            .http
            .request(HttpRequest::post(self.url.as_str()).with_body(body))
            .await?;

        match response.status_code {
            status::OK => Ok(()),
            status::FORBIDDEN => Err(DomainError::email_in_use(
                "provided email in registration already used",
            )
            .into()),
            other => Err(RepoError::unexpected_status(other)),
        }
    }
}
