use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::application::normalizer::{normalize_response, NormalizedResponse, ResponseMode};
use crate::application::processor::MessageProcessor;
use crate::application::raw_input::parse_raw_messages;
use crate::domain::core::directive::A2uiMessage;
use crate::domain::core::event::SemanticEvent;
use crate::domain::core::message::Part;
use crate::domain::error::A2uiError;
use crate::services::client::AsyncA2uiClient;
use crate::services::config::SharedConfig;

/// One captured request or response, for the debug view
#[derive(Debug, Clone)]
pub struct DebugCapture {
    pub timestamp: DateTime<Utc>,
    pub payload: Value,
}

impl DebugCapture {
    fn now(payload: Value) -> Self {
        Self {
            timestamp: Utc::now(),
            payload,
        }
    }
}

/// Orchestrates one conversation with an agent.
///
/// Owns the message processor and drives the send → normalize → apply
/// cycle for user text, semantic interaction events, and pasted test
/// input. Each send sets the loading flag, runs to completion, and
/// clears it; failures raise the error flag without touching surfaces
/// already rendered. Concurrent in-flight requests are neither
/// serialized nor cancelled here.
pub struct ChatSession<C: AsyncA2uiClient> {
    client: C,
    config: SharedConfig,
    processor: MessageProcessor,
    loading: bool,
    error: Option<String>,
    text_response: Option<String>,
    active_surfaces: IndexSet<String>,
    last_request: Option<DebugCapture>,
    last_response: Option<DebugCapture>,
}

impl<C: AsyncA2uiClient> ChatSession<C> {
    pub fn new(client: C, config: SharedConfig) -> Self {
        Self {
            client,
            config,
            processor: MessageProcessor::new(),
            loading: false,
            error: None,
            text_response: None,
            active_surfaces: IndexSet::new(),
            last_request: None,
            last_response: None,
        }
    }

    /// Send a user text message and apply the agent's response.
    #[cfg_attr(feature = "tracing", instrument(skip(self, body)))]
    pub async fn send_text(&mut self, body: &str) -> Result<NormalizedResponse, A2uiError> {
        if body.is_empty() {
            return Ok(NormalizedResponse::default());
        }
        self.text_response = None;
        self.send_parts(vec![Part::text(body.to_string())]).await
    }

    /// Wrap a semantic interaction event as an outbound data part, send
    /// it, and apply the agent's response through the same pipeline.
    #[cfg_attr(feature = "tracing", instrument(skip(self, event), fields(source = %event.source_component_id)))]
    pub async fn send_semantic_event(
        &mut self,
        event: SemanticEvent,
    ) -> Result<NormalizedResponse, A2uiError> {
        self.send_parts(vec![event.into_part()]).await
    }

    async fn send_parts(&mut self, parts: Vec<Part>) -> Result<NormalizedResponse, A2uiError> {
        self.loading = true;
        self.error = None;
        self.last_request = Some(DebugCapture::now(
            serde_json::to_value(&parts).unwrap_or(Value::Null),
        ));

        let result = self.client.send_parts(parts).await;
        self.loading = false;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err);
            }
        };

        self.last_response = Some(DebugCapture::now(response.clone()));
        self.apply_response(&response)
    }

    /// Normalize a response and apply its directives or text.
    fn apply_response(&mut self, response: &Value) -> Result<NormalizedResponse, A2uiError> {
        let mode = if self.config.ui_mode() {
            ResponseMode::Ui
        } else {
            ResponseMode::Text
        };
        let normalized = normalize_response(response, mode);

        if !normalized.messages.is_empty() {
            self.processor.process_messages(&normalized.messages)?;
        }
        self.active_surfaces
            .extend(normalized.new_surface_ids.iter().cloned());
        if let Some(text) = &normalized.text {
            self.text_response = Some(text.clone());
        }

        Ok(normalized)
    }

    /// Parse pasted test JSON and render it message by message.
    ///
    /// Previously rendered surfaces are deleted first. A processing
    /// failure halts the batch and reports the offending message;
    /// messages already applied stay rendered. Returns the number of
    /// messages applied.
    pub fn render_test_json(&mut self, input: &str) -> Result<usize, A2uiError> {
        self.delete_active_surfaces();

        let messages = parse_raw_messages(input)?;
        let mut rendered = 0;
        for message in &messages {
            if let Err(err) = self.processor.process_messages(std::slice::from_ref(message)) {
                let detail = serde_json::to_string(message).unwrap_or_default();
                return Err(A2uiError::Rendering {
                    message: err.to_string(),
                    detail: detail.chars().take(1000).collect(),
                });
            }
            if let A2uiMessage::SurfaceUpdate(update) = message {
                self.active_surfaces.insert(update.surface_id.clone());
            }
            rendered += 1;
        }
        Ok(rendered)
    }

    /// Delete every active surface and reset conversation state.
    pub fn clear_chat(&mut self) {
        self.delete_active_surfaces();
        self.text_response = None;
        self.error = None;
        self.last_request = None;
        self.last_response = None;
    }

    fn delete_active_surfaces(&mut self) {
        let deletes: Vec<A2uiMessage> = self
            .active_surfaces
            .drain(..)
            .map(A2uiMessage::delete_surface)
            .collect();
        if !deletes.is_empty() {
            // Deleting an unknown surface is a no-op, never an error
            let _ = self.processor.process_messages(&deletes);
        }
    }

    /// Switch between UI and text interpretation of responses
    pub fn set_ui_mode(&mut self, ui_mode: bool) {
        self.config.set_ui_mode(ui_mode);
        self.text_response = None;
    }

    /// Fetch the agent card from the configured server
    pub async fn agent_card(&self) -> Result<crate::domain::AgentCard, A2uiError> {
        self.client.agent_card().await
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn processor(&self) -> &MessageProcessor {
        &self.processor
    }

    pub fn processor_mut(&mut self) -> &mut MessageProcessor {
        &mut self.processor
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn text_response(&self) -> Option<&str> {
        self.text_response.as_deref()
    }

    pub fn active_surfaces(&self) -> impl Iterator<Item = &str> {
        self.active_surfaces.iter().map(String::as_str)
    }

    pub fn last_request(&self) -> Option<&DebugCapture> {
        self.last_request.as_ref()
    }

    pub fn last_response(&self) -> Option<&DebugCapture> {
        self.last_response.as_ref()
    }
}
