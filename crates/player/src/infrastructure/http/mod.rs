//! HTTP plumbing: the reqwest transport and the session-aware client on top.

mod refresh_gate;
pub mod refreshing_client;
pub mod reqwest_transport;

pub use refreshing_client::RefreshingHttpClient;
pub use reqwest_transport::ReqwestTransport;
