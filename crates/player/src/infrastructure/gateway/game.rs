//! Game gateway (`GET /game`, `POST /game`)

use std::sync::Arc;

use tabletop_domain::{DomainError, Game, GameId, Page};
use tabletop_shared::{status, CreateGameRequest, GameDto, GamesPayload, HttpRequest};

use super::{decode_data, paged_url};
use crate::ports::outbound::{GameRepository, HttpClient, RepoError};

pub fn map_to_domain(dto: GameDto) -> Result<Game, DomainError> {
    Game::from_parts(GameId::from(dto.id), dto.name)
}

pub fn map_to_request(game: &Game) -> CreateGameRequest {
    CreateGameRequest {
        name: game.name().to_string(),
    }
}

pub struct GameGateway {
    url: String,
    http: Arc<dyn HttpClient>,
}

impl GameGateway {
    pub fn new(url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl GameRepository for GameGateway {
    async fn list(&self, page: &Page) -> Result<Vec<Game>, RepoError> {
        let response = self
            .http
            .request(HttpRequest::get(paged_url(&self.url, page)))
            .await?;

        match response.status_code {
            status::OK => {
                let payload: GamesPayload = decode_data(response.body)?;
                Ok(payload
                    .games
                    .into_iter()
                    .map(map_to_domain)
                    .collect::<Result<_, _>>()?)
            }
            other => Err(RepoError::unexpected_status(other)),
        }
    }

    async fn create(&self, game: &Game) -> Result<(), RepoError> {
        let body = serde_json::to_value(map_to_request(game)).map_err(RepoError::malformed)?;
        let response = self
            .http
            .request(HttpRequest::post(self.url.as_str()).with_body(body))
            .await?;

        match response.status_code {
            status::OK => Ok(()),
            other => Err(RepoError::unexpected_status(other)),
        }
    }
}
