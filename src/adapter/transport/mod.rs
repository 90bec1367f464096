//! Transport adapters

pub mod http;

#[cfg(feature = "http-client")]
pub use http::A2uiHttpClient;
