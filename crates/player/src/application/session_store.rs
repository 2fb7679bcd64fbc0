//! Authenticated session state shared by the HTTP layer and the UI.
//!
//! [`SessionStore`] is a cheap-to-clone handle. Every mutation updates the
//! in-memory copy and writes the whole record through to the
//! [`StorageProvider`] before returning, so a reload always sees the latest
//! state.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tabletop_domain::Session;

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Snapshot of the session. Both fields are empty when nobody is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub token: String,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub email: Option<String>,
    pub token: Option<String>,
}

impl SessionUpdate {
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            email: None,
            token: Some(token.into()),
        }
    }
}

impl From<&Session> for SessionUpdate {
    fn from(session: &Session) -> Self {
        Self {
            email: Some(session.email().to_string()),
            token: Some(session.token().to_string()),
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    storage: Arc<dyn StorageProvider>,
}

impl SessionStore {
    /// Create a store, restoring the persisted record if there is one.
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        let state = match storage.load(storage_keys::SESSION) {
            Some(raw) => match serde_json::from_str::<SessionState>(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring malformed persisted session");
                    SessionState::default()
                }
            },
            None => SessionState::default(),
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            storage,
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Current access token; empty when signed out.
    pub fn token(&self) -> String {
        self.snapshot().token
    }

    /// Merge `update` into the session and persist it.
    pub fn set_session(&self, update: SessionUpdate) {
        let next = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if let Some(email) = update.email {
                state.email = email;
            }
            if let Some(token) = update.token {
                state.token = token;
            }
            state.clone()
        };
        self.persist(&next);
    }

    /// Reset to the signed-out state and persist it.
    pub fn clear_session(&self) {
        let next = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            *state = SessionState::default();
            state.clone()
        };
        self.persist(&next);
    }

    fn persist(&self, state: &SessionState) {
        match serde_json::to_string(state) {
            Ok(data) => self.storage.save(storage_keys::SESSION, &data),
            Err(e) => tracing::error!(error = %e, "Failed to serialize session"),
        }
    }
}
