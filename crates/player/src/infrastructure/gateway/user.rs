//! User gateway (`GET /user`, `GET /user/me`)

use std::sync::Arc;

use tabletop_domain::{DomainError, Email, FullName, Page, User, UserId};
use tabletop_shared::{status, HttpRequest, UserDto, UsersPayload};

use super::{decode_data, paged_url};
use crate::ports::outbound::{HttpClient, RepoError, UserRepository};

pub fn map_to_domain(dto: UserDto) -> Result<User, DomainError> {
    let email = Email::new(dto.email)?;
    let fullname = FullName::new(dto.name, dto.surname, dto.middlename)?;
    Ok(User::from_parts(UserId::from(dto.id), email, fullname))
}

pub fn map_to_dto(user: &User) -> UserDto {
    UserDto {
        id: user.id().to_string(),
        email: user.email().to_string(),
        name: user.fullname().name().to_string(),
        surname: user.fullname().surname().to_string(),
        middlename: user.fullname().middlename().to_string(),
    }
}

pub struct UserGateway {
    url: String,
    http: Arc<dyn HttpClient>,
}

impl UserGateway {
    pub fn new(url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl UserRepository for UserGateway {
    async fn list(&self, page: &Page) -> Result<Vec<User>, RepoError> {
        let response = self
            .http
            .request(HttpRequest::get(paged_url(&self.url, page)))
            .await?;

        match response.status_code {
            status::OK => {
                let payload: UsersPayload = decode_data(response.body)?;
                Ok(payload
                    .users
                    .into_iter()
                    .map(map_to_domain)
                    .collect::<Result<_, _>>()?)
            }
            other => Err(RepoError::unexpected_status(other)),
        }
    }

    async fn me(&self) -> Result<User, RepoError> {
        let response = self
            .http
            .request(HttpRequest::get(format!("{}/me", self.url)))
            .await?;

        match response.status_code {
            status::OK => Ok(map_to_domain(decode_data(response.body)?)?),
            other => Err(RepoError::unexpected_status(other)),
        }
    }
}
