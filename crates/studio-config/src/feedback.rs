use std::env;

use serde::{Deserialize, Serialize};

fn default_fast_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_premium_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_max_tokens() -> u32 {
    2000
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Model used for the default (fast) scoring pass
    #[serde(default = "default_fast_model")]
    pub fast_model: String,
    /// Model used when premium feedback is requested
    #[serde(default = "default_premium_model")]
    pub premium_model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl FeedbackConfig {
    pub fn new() -> Self {
        let fast_model = env::var("STUDIO_FAST_MODEL").unwrap_or_else(|_| default_fast_model());
        let premium_model =
            env::var("STUDIO_PREMIUM_MODEL").unwrap_or_else(|_| default_premium_model());
        let max_tokens = env::var("STUDIO_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_tokens);

        Self {
            fast_model,
            premium_model,
            max_tokens,
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            fast_model: default_fast_model(),
            premium_model: default_premium_model(),
            max_tokens: default_max_tokens(),
        }
    }
}
