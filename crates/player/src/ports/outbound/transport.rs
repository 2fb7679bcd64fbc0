//! Low-level transport beneath the HTTP client.
//!
//! Unlike [`super::HttpClient`], a transport rejects non-2xx answers with
//! [`TransportError::Status`]; the client above it decides what a rejected
//! status means (refresh, redirect, or pass it on).

use serde_json::Value;
use tabletop_shared::HttpRequest;

/// Which send of a caller's request this is.
///
/// A request is sent as `Initial` first. After a successful credential
/// refresh it is replayed exactly once as `Retry`, and a `Retry` is never
/// refreshed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Initial,
    Retry,
}

/// Status and decoded body of a server answer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub data: Value,
}

impl RawResponse {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("Server responded with status {}", .0.status)]
    Status(RawResponse),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// Status code of the answer behind this error, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status(raw) => Some(raw.status),
            TransportError::Network(_) | TransportError::Decode(_) => None,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError>;
}
