use indexmap::IndexMap;
use serde_json::Value;
use tokio::sync::mpsc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::application::data_model::DataModelStore;
use crate::domain::core::directive::A2uiMessage;
use crate::domain::core::event::SemanticEvent;
use crate::domain::core::surface::Surface;
use crate::domain::error::A2uiError;

/// Owns the surface store and per-surface data models, and carries the
/// outbound semantic-event channel.
///
/// All mutation of surfaces and data flows through [`process_messages`];
/// renderers only read resolved data and emit events.
///
/// [`process_messages`]: MessageProcessor::process_messages
pub struct MessageProcessor {
    surfaces: IndexMap<String, Surface>,
    data: DataModelStore,
    events_tx: mpsc::UnboundedSender<SemanticEvent>,
    events_rx: Option<mpsc::UnboundedReceiver<SemanticEvent>>,
}

impl Default for MessageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageProcessor {
    pub fn new() -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            surfaces: IndexMap::new(),
            data: DataModelStore::new(),
            events_tx,
            events_rx: Some(events_rx),
        }
    }

    /// Apply a batch of A2UI directives in order.
    #[cfg_attr(feature = "tracing", instrument(skip(self, messages), fields(count = messages.len())))]
    pub fn process_messages(&mut self, messages: &[A2uiMessage]) -> Result<(), A2uiError> {
        for message in messages {
            match message {
                A2uiMessage::SurfaceUpdate(update) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        surface = %update.surface_id,
                        components = update.components.len(),
                        "applying surface update"
                    );
                    let surface = self.surfaces.entry(update.surface_id.clone()).or_default();
                    surface.apply_components(update.components.clone());
                }
                A2uiMessage::DataModelUpdate(update) => {
                    self.data.apply_update(update);
                }
                A2uiMessage::BeginRendering(begin) => {
                    let surface = self.surfaces.entry(begin.surface_id.clone()).or_default();
                    surface.root = begin.root.clone();
                }
                A2uiMessage::DeleteSurface(delete) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(surface = %delete.surface_id, "deleting surface");
                    self.surfaces.shift_remove(&delete.surface_id);
                    self.data.delete_surface(&delete.surface_id);
                }
            }
        }
        Ok(())
    }

    /// All live surfaces, in creation order
    pub fn surfaces(&self) -> &IndexMap<String, Surface> {
        &self.surfaces
    }

    pub fn surface(&self, surface_id: &str) -> Option<&Surface> {
        self.surfaces.get(surface_id)
    }

    /// Resolve a component property against the surface's data model.
    /// Failures and nulls degrade to `None` ("no data").
    pub fn resolve_property(&self, surface_id: &str, value: &Value) -> Option<Value> {
        self.data.resolve_property(surface_id, value)
    }

    /// Read access to the data model store
    pub fn data(&self) -> &DataModelStore {
        &self.data
    }

    /// Sender half of the semantic-event channel, for renderers
    pub fn event_sender(&self) -> mpsc::UnboundedSender<SemanticEvent> {
        self.events_tx.clone()
    }

    /// Dispatch a semantic event into the outbound channel
    pub fn emit_event(&self, event: SemanticEvent) -> Result<(), A2uiError> {
        self.events_tx
            .send(event)
            .map_err(|_| A2uiError::Internal("semantic event channel closed".to_string()))
    }

    /// Take the receiving half of the event channel. Yields `Some` once;
    /// the single consumer drains interaction events one at a time.
    pub fn take_events(&mut self) -> Option<mpsc::UnboundedReceiver<SemanticEvent>> {
        self.events_rx.take()
    }
}
