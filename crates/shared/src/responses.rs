//! Server response envelope and per-endpoint payloads
//!
//! Every JSON response from the API is wrapped as
//! `{ "status": 200, "message": "success", "data": ..., "error": ... }`.
//! The payload types below describe `data` for each endpoint.

use serde::{Deserialize, Serialize};

use crate::dto::{GameDto, UserDto};

/// The API's response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ResponseEnvelope<T> {
    /// Build a success envelope around `data`
    pub fn success(data: T) -> Self {
        Self {
            status: 200,
            message: "success".to_string(),
            data: Some(data),
            error: None,
        }
    }

    /// Take the payload, if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// `data` of `GET /user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<UserDto>,
}

/// `data` of `GET /game`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamesPayload {
    pub games: Vec<GameDto>,
}

/// `data` of `POST /auth/login` and `POST /auth/refresh`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    #[serde(default)]
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_users_envelope() {
        let body = json!({
            "status": 200,
            "message": "success",
            "data": {"users": [
                {"id": "1", "email": "a@b.c", "name": "A", "surname": "", "middlename": ""}
            ]}
        });
        let env: ResponseEnvelope<UsersPayload> = serde_json::from_value(body).unwrap();
        let users = env.into_data().unwrap().users;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "a@b.c");
    }

    #[test]
    fn missing_data_decodes_as_none() {
        let env: ResponseEnvelope<TokenPayload> =
            serde_json::from_value(json!({"status": 403, "message": "error"})).unwrap();
        assert!(env.data.is_none());
    }
}
