//! Infrastructure adapters: HTTP transport, storage, navigation and the
//! repository gateways that speak the API's wire format.

pub mod gateway;
pub mod http;
pub mod navigation;
pub mod storage;
