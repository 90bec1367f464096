use std::sync::Arc;

use tokio::sync::watch;

/// Mutable client configuration shared by the transport, the normalizer
/// and the UI shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub server_url: String,
    /// true = UI mode (A2UI directives), false = text mode
    pub ui_mode: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Attach Basic auth to outbound requests when credentials are set
    pub send_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:7860".to_string(),
            ui_mode: true,
            username: None,
            password: None,
            send_credentials: false,
        }
    }
}

/// Shared handle to the client configuration.
///
/// Consumers hold a clone of the handle and read snapshots; mutations go
/// through [`update`], which notifies every subscriber through a watch
/// channel. Change propagation is explicit: nothing observes the config
/// without subscribing.
///
/// [`update`]: SharedConfig::update
#[derive(Debug, Clone)]
pub struct SharedConfig {
    tx: Arc<watch::Sender<ClientConfig>>,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl SharedConfig {
    pub fn new(config: ClientConfig) -> Self {
        let (tx, _rx) = watch::channel(config);
        Self { tx: Arc::new(tx) }
    }

    /// A point-in-time copy of the configuration
    pub fn snapshot(&self) -> ClientConfig {
        self.tx.borrow().clone()
    }

    /// Apply a mutation and notify subscribers
    pub fn update(&self, mutate: impl FnOnce(&mut ClientConfig)) {
        self.tx.send_modify(mutate);
    }

    /// Receive explicit change notifications (and current values)
    pub fn subscribe(&self) -> watch::Receiver<ClientConfig> {
        self.tx.subscribe()
    }

    pub fn server_url(&self) -> String {
        self.tx.borrow().server_url.clone()
    }

    pub fn ui_mode(&self) -> bool {
        self.tx.borrow().ui_mode
    }

    pub fn set_server_url(&self, url: impl Into<String>) {
        self.update(|config| config.server_url = url.into());
    }

    pub fn set_ui_mode(&self, ui_mode: bool) {
        self.update(|config| config.ui_mode = ui_mode);
    }
}
