//! HTTP transport adapter

#[cfg(feature = "http-client")]
mod client;

#[cfg(feature = "http-client")]
pub use client::A2uiHttpClient;
