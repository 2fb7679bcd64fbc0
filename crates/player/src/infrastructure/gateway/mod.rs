//! Repository implementations over the HTTP client.
//!
//! Each gateway owns the absolute URL of its resource, maps domain entities
//! to wire DTOs and back, and decides what each response status means.

pub mod game;
pub mod registration;
pub mod session;
pub mod user;

pub use game::GameGateway;
pub use registration::RegistrationGateway;
pub use session::SessionGateway;
pub use user::UserGateway;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tabletop_domain::Page;
use tabletop_shared::ResponseEnvelope;

use crate::ports::outbound::RepoError;

/// Decode the `data` member of a success envelope.
pub(crate) fn decode_data<T: DeserializeOwned>(body: Value) -> Result<T, RepoError> {
    serde_json::from_value::<ResponseEnvelope<T>>(body)
        .map_err(RepoError::malformed)?
        .into_data()
        .ok_or_else(|| RepoError::malformed("missing data"))
}

/// Append `limit`/`offset` to a list URL; the default page adds nothing.
pub(crate) fn paged_url(url: &str, page: &Page) -> String {
    let query = page
        .query_pairs()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        url.to_string()
    } else {
        format!("{url}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabletop_domain::DomainError;
    use tabletop_shared::UsersPayload;

    #[test]
    fn paged_url_only_adds_query_for_explicit_pages() {
        assert_eq!(paged_url("http://api/user", &Page::default()), "http://api/user");
        assert_eq!(
            paged_url("http://api/user", &Page::new(10, 20).unwrap()),
            "http://api/user?limit=10&offset=20"
        );
    }

    #[test]
    fn decode_data_rejects_missing_or_mistyped_payloads() {
        let missing = decode_data::<UsersPayload>(json!({"status": 200}));
        assert!(matches!(
            missing,
            Err(RepoError::Domain(DomainError::Unexpected(_)))
        ));

        let mistyped = decode_data::<UsersPayload>(json!({"data": {"users": 3}}));
        assert!(matches!(
            mistyped,
            Err(RepoError::Domain(DomainError::Unexpected(_)))
        ));

        let bare = decode_data::<UsersPayload>(json!("error"));
        assert!(bare.is_err());
    }
}
