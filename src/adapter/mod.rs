//! Adapters: renderers for the supported visualization components and
//! the HTTP transport.

pub mod error;
pub mod renderers;
pub mod transport;

#[cfg(feature = "http-client")]
pub use error::HttpClientError;
pub use renderers::{ChartRenderer, KnowledgeGraphRenderer};
#[cfg(feature = "http-client")]
pub use transport::A2uiHttpClient;
