//! reqwest-backed transport
//!
//! On native targets the client keeps a cookie jar so the server's refresh
//! cookie rides along; in the browser the fetch is made with credentials
//! included, which hands cookie handling to the browser.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;
use tabletop_shared::{HttpMethod, HttpRequest};

use crate::ports::outbound::{RawResponse, Transport, TransportError};

#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    "HTTP client setup failed, continuing without timeout or cookie store"
                );
                Client::new()
            });

        // The browser applies its own fetch timeouts.
        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout;
            Client::new()
        };

        Self { client }
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// JSON when the body parses as JSON, the raw text otherwise, `null` when empty.
fn decode_body(bytes: &[u8]) -> Result<Value, TransportError> {
    if bytes.is_empty() {
        return Ok(Value::Null);
    }
    if let Ok(value) = serde_json::from_slice(bytes) {
        return Ok(value);
    }
    std::str::from_utf8(bytes)
        .map(|text| Value::String(text.to_string()))
        .map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(method(request.method), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let raw = RawResponse::new(status.as_u16(), decode_body(&bytes)?);
        if status.is_success() {
            Ok(raw)
        } else {
            Err(TransportError::Status(raw))
        }
    }
}
