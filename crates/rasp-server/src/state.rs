use std::sync::Arc;

use rasp_core::config::RelayConfig;
use rasp_core::{StatusStore, Trigger};

use crate::relay::{self, StatusRelay};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: StatusStore,
    pub relay: Arc<dyn StatusRelay>,
    pub trigger: Arc<Trigger>,
}

impl AppState {
    /// Build the state for a running server: empty store, Slack relay when
    /// credentials are configured.
    pub fn new(config: &RelayConfig) -> anyhow::Result<Self> {
        let trigger = config.trigger()?;
        let relay = relay::from_config(&config.slack)?;
        Ok(Self::with_relay(StatusStore::new(), relay, trigger))
    }

    pub fn with_relay(store: StatusStore, relay: Arc<dyn StatusRelay>, trigger: Trigger) -> Self {
        Self {
            store,
            relay,
            trigger: Arc::new(trigger),
        }
    }
}
