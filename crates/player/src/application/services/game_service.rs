//! Game Service - Listing and creating games

use std::sync::Arc;

use tabletop_domain::{Game, Page};

use crate::application::ServiceError;
use crate::ports::outbound::GameRepository;

pub struct GameService {
    repo: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(repo: Arc<dyn GameRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<Game>, ServiceError> {
        self.repo.list(&page).await.map_err(|e| {
            let err = ServiceError::from(e);
            tracing::error!(code = err.code(), error = %err, "Failed to list games");
            err
        })
    }

    /// Create a game named `name` and return it with its client-side id.
    pub async fn create(&self, name: &str) -> Result<Game, ServiceError> {
        let game = Game::new(name.trim())?;

        self.repo.create(&game).await.map_err(|e| {
            let err = ServiceError::from(e);
            tracing::error!(code = err.code(), error = %err, "Failed to create game");
            err
        })?;

        tracing::info!(game_id = %game.id(), name = game.name(), "Game created");
        Ok(game)
    }
}
