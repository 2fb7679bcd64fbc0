//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the API, the browser and local
//! storage without depending on concrete implementations.

pub mod error;
pub mod http_client;
pub mod navigation;
pub mod platform;
pub mod repositories;
pub mod transport;

pub use error::RepoError;
pub use http_client::{HttpClient, HttpClientError};
pub use navigation::NavigationPort;
pub use platform::{storage_keys, StorageProvider};
pub use repositories::{GameRepository, RegistrationRepository, SessionRepository, UserRepository};
pub use transport::{Attempt, RawResponse, Transport, TransportError};

#[cfg(test)]
pub use http_client::MockHttpClient;
#[cfg(test)]
pub use navigation::MockNavigationPort;
#[cfg(test)]
pub use platform::MockStorageProvider;
#[cfg(test)]
pub use repositories::{
    MockGameRepository, MockRegistrationRepository, MockSessionRepository, MockUserRepository,
};
#[cfg(test)]
pub use transport::MockTransport;
