use std::env;

use serde::{Deserialize, Serialize};

/// The AI relay attaches server-side credentials per provider; the client
/// only needs its URL.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub url: String,
}

impl RelayConfig {
    pub fn new() -> Self {
        let url = env::var("STUDIO_RELAY_URL").unwrap_or_default();

        Self { url }
    }

    /// Feedback is unavailable without a relay endpoint.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { url: String::new() }
    }
}
