use std::env;

use serde::{Deserialize, Serialize};

fn default_feed() -> String {
    "data/articles.json".to_string()
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticlesConfig {
    /// Feed document location, a local path or an http(s) URL
    #[serde(default = "default_feed")]
    pub feed: String,
    /// Webhook that triggers a feed regeneration on the hosting side
    #[serde(default)]
    pub update_webhook: String,
    /// Bearer token for the update webhook
    #[serde(default)]
    pub update_token: String,
}

impl ArticlesConfig {
    pub fn new() -> Self {
        let feed = env::var("STUDIO_FEED").unwrap_or_else(|_| default_feed());
        let update_webhook = env::var("STUDIO_UPDATE_WEBHOOK").unwrap_or_default();
        let update_token = env::var("STUDIO_UPDATE_TOKEN").unwrap_or_default();

        Self {
            feed,
            update_webhook,
            update_token,
        }
    }
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            feed: default_feed(),
            update_webhook: String::new(),
            update_token: String::new(),
        }
    }
}
