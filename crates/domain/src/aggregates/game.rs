//! Game aggregate

use crate::common::is_empty;
use crate::error::DomainError;
use tabletop_domain::GameId;

/// A game listed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    name: String,
}

impl Game {
    /// Create a game that has not been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ArgumentNotProvided` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Self::from_parts(GameId::new(), name)
    }

    /// Rebuild a game from server data.
    pub fn from_parts(id: GameId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if is_empty(&name) {
            return Err(DomainError::argument_not_provided("missing game name"));
        }
        Ok(Self { id, name })
    }

    #[inline]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_a_name() {
        assert!(matches!(
            Game::new(""),
            Err(DomainError::ArgumentNotProvided(_))
        ));
        assert_eq!(Game::new("Chess").unwrap().name(), "Chess");
    }
}
