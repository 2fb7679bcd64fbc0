//! HTTP client contract used by every repository.
//!
//! A call yields exactly one [`HttpResponse`] or one [`HttpClientError`].
//! Any status the server answered with, success or not, is a response;
//! only failures that produced no response at all are errors.

use tabletop_shared::{HttpRequest, HttpResponse};

/// Failure with no server response behind it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    /// Connection refused, DNS failure, timeout and the like.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered but the body could not be read.
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait HttpClient: Send + Sync {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpClientError>;
}
