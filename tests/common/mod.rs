//! Shared test doubles for the rendering and transport seams

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use a2ui_client::port::{ChartBackend, ChartConfig, GraphBackend, GraphElement};
use a2ui_client::{A2uiError, AgentCard, AsyncA2uiClient, Part};

/// Shared record of backend activity, inspectable after the renderer
/// has taken ownership of the backend.
#[derive(Default, Clone)]
pub struct BackendLog {
    inner: Arc<Mutex<LogInner>>,
}

#[derive(Default)]
struct LogInner {
    mounted: Vec<Value>,
    destroyed: Vec<u64>,
    relayouts: Vec<(u64, Duration)>,
}

impl BackendLog {
    pub fn mounted(&self) -> Vec<Value> {
        self.inner.lock().unwrap().mounted.clone()
    }

    pub fn destroyed(&self) -> Vec<u64> {
        self.inner.lock().unwrap().destroyed.clone()
    }

    pub fn relayouts(&self) -> Vec<(u64, Duration)> {
        self.inner.lock().unwrap().relayouts.clone()
    }
}

/// Chart engine double: hands out numbered handles and records calls.
pub struct TestChartBackend {
    log: BackendLog,
    next_handle: u64,
    pub fail_mount: bool,
}

impl TestChartBackend {
    pub fn new(log: BackendLog) -> Self {
        Self {
            log,
            next_handle: 0,
            fail_mount: false,
        }
    }
}

impl ChartBackend for TestChartBackend {
    type Handle = u64;

    fn mount(&mut self, config: &ChartConfig) -> Result<Self::Handle, A2uiError> {
        if self.fail_mount {
            return Err(A2uiError::Rendering {
                message: "canvas unavailable".to_string(),
                detail: String::new(),
            });
        }
        let handle = self.next_handle;
        self.next_handle += 1;
        self.log
            .inner
            .lock()
            .unwrap()
            .mounted
            .push(serde_json::to_value(config).unwrap());
        Ok(handle)
    }

    fn destroy(&mut self, handle: Self::Handle) {
        self.log.inner.lock().unwrap().destroyed.push(handle);
    }
}

/// Layout engine double for the knowledge-graph renderer.
pub struct TestGraphBackend {
    log: BackendLog,
    next_handle: u64,
}

impl TestGraphBackend {
    pub fn new(log: BackendLog) -> Self {
        Self {
            log,
            next_handle: 0,
        }
    }
}

impl GraphBackend for TestGraphBackend {
    type Handle = u64;

    fn mount(
        &mut self,
        elements: &[GraphElement],
        layout: &str,
    ) -> Result<Self::Handle, A2uiError> {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.log.inner.lock().unwrap().mounted.push(serde_json::json!({
            "layout": layout,
            "elements": elements,
        }));
        Ok(handle)
    }

    fn destroy(&mut self, handle: Self::Handle) {
        self.log.inner.lock().unwrap().destroyed.push(handle);
    }

    fn schedule_relayout(&mut self, handle: &mut Self::Handle, delay: Duration) {
        self.log.inner.lock().unwrap().relayouts.push((*handle, delay));
    }
}

/// Transport double replaying canned JSON-RPC responses.
pub struct StubClient {
    responses: Mutex<VecDeque<Value>>,
    pub sent: Mutex<Vec<Vec<Part>>>,
}

impl StubClient {
    pub fn with_responses(responses: Vec<Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl AsyncA2uiClient for StubClient {
    async fn send_raw_request<'a>(&self, _request: &'a str) -> Result<String, A2uiError> {
        Err(A2uiError::Internal("not used by tests".to_string()))
    }

    async fn send_parts(&self, parts: Vec<Part>) -> Result<Value, A2uiError> {
        self.sent.lock().unwrap().push(parts);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| A2uiError::Internal("connection refused".to_string()))
    }

    async fn agent_card(&self) -> Result<AgentCard, A2uiError> {
        Ok(AgentCard::builder()
            .name("Test Agent".to_string())
            .description("Stub agent for session tests".to_string())
            .url("http://localhost:7860".to_string())
            .version("1.0.0".to_string())
            .capabilities(Default::default())
            .build())
    }
}
