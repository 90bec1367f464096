//! Service layer: the client trait, the shared configuration context,
//! and the chat session orchestrator.

pub mod client;
pub mod config;
pub mod session;

pub use client::AsyncA2uiClient;
pub use config::{ClientConfig, SharedConfig};
pub use session::{ChatSession, DebugCapture};
