//! HTTP client adapter for the A2UI-over-A2A protocol

// This module is conditionally compiled with #[cfg(feature = "http-client")] in mod.rs

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::Value;
use url::Url;

#[cfg(feature = "tracing")]
use tracing::{debug, error, instrument};

use crate::{
    adapter::error::HttpClientError,
    application::json_rpc::{client_capabilities_metadata, SendTaskRequest, TaskSendParams},
    domain::{
        core::message::{Part, A2UI_EXTENSION_URI},
        A2uiError, AgentCard,
    },
    services::{client::AsyncA2uiClient, config::SharedConfig},
};

/// Path of the agent card relative to the server URL
const AGENT_CARD_PATH: &str = "/.well-known/agent.json";

/// HTTP client for talking to an A2UI-capable A2A server.
///
/// Reads the server URL, response mode and credentials from the shared
/// configuration at send time, so server switches and mode toggles apply
/// to the next request without rebuilding the client.
pub struct A2uiHttpClient {
    config: SharedConfig,
    client: Client,
    /// Timeout in seconds
    timeout: u64,
}

impl A2uiHttpClient {
    /// Create a new HTTP client reading from the given configuration
    pub fn new(config: SharedConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            timeout: 30, // Default timeout in seconds
        }
    }

    /// Set the timeout for requests
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }

    /// Headers for an outbound request, derived from the current config
    fn request_headers(&self) -> Result<HeaderMap, HttpClientError> {
        let config = self.config.snapshot();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("a2a-version", HeaderValue::from_static("1.0"));

        // The A2UI extension is only advertised in UI mode
        if config.ui_mode {
            headers.insert(
                "x-a2a-extensions",
                HeaderValue::from_static(A2UI_EXTENSION_URI),
            );
        }

        if config.send_credentials {
            if let (Some(username), Some(password)) = (&config.username, &config.password) {
                let credentials = BASE64.encode(format!("{}:{}", username, password));
                let value = HeaderValue::from_str(&format!("Basic {}", credentials))
                    .map_err(|e| HttpClientError::Request(e.to_string()))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }
}

#[async_trait]
impl AsyncA2uiClient for A2uiHttpClient {
    #[cfg_attr(feature = "tracing", instrument(skip(self, request), fields(request_len = request.len())))]
    async fn send_raw_request<'a>(&self, request: &'a str) -> Result<String, A2uiError> {
        let url = self.config.server_url();

        #[cfg(feature = "tracing")]
        debug!(url = %url, "Sending HTTP request");

        let response = self
            .client
            .post(&url)
            .headers(self.request_headers()?)
            .body(request.to_string())
            .timeout(Duration::from_secs(self.timeout))
            .send()
            .await
            .map_err(|e| {
                #[cfg(feature = "tracing")]
                error!("HTTP request failed: {}", e);
                HttpClientError::Reqwest(e)
            })?;

        if response.status().is_success() {
            let body = response.text().await.map_err(HttpClientError::Reqwest)?;
            #[cfg(feature = "tracing")]
            debug!("HTTP request successful, response length: {}", body.len());
            Ok(body)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            #[cfg(feature = "tracing")]
            error!("HTTP request failed with status {}: {}", status, body);
            Err(HttpClientError::Response {
                status: status.as_u16(),
                message: body,
            }
            .into())
        }
    }

    #[cfg_attr(feature = "tracing", instrument(skip(self, parts), fields(parts = parts.len())))]
    async fn send_parts(&self, parts: Vec<Part>) -> Result<Value, A2uiError> {
        let request = SendTaskRequest::new(TaskSendParams::for_user_parts(
            parts,
            Some(client_capabilities_metadata()),
        ));
        let body = serde_json::to_string(&request)?;
        let response_text = self.send_raw_request(&body).await?;
        let response: Value = serde_json::from_str(&response_text)?;
        Ok(response)
    }

    #[cfg_attr(feature = "tracing", instrument(skip(self)))]
    async fn agent_card(&self) -> Result<AgentCard, A2uiError> {
        let base = Url::parse(&self.config.server_url()).map_err(HttpClientError::Url)?;
        let url = base.join(AGENT_CARD_PATH).map_err(HttpClientError::Url)?;

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.timeout))
            .send()
            .await
            .map_err(HttpClientError::Reqwest)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HttpClientError::Response {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let card: AgentCard = response.json().await.map_err(HttpClientError::Reqwest)?;
        Ok(card)
    }
}
