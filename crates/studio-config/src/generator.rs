use std::env;

use serde::{Deserialize, Serialize};

fn default_min_word_count() -> usize {
    300
}

fn default_max_articles() -> usize {
    50
}

fn default_keep_generated() -> usize {
    30
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

fn default_pause_ms() -> u64 {
    3000
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Expanded articles below this word count are discarded
    #[serde(default = "default_min_word_count")]
    pub min_word_count: usize,
    /// Total corpus cap after a merge
    #[serde(default = "default_max_articles")]
    pub max_articles: usize,
    /// How many previously generated articles survive a merge
    #[serde(default = "default_keep_generated")]
    pub keep_generated: usize,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    /// Pause between expansion calls to stay under provider rate limits
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        let min_word_count = env::var("STUDIO_MIN_WORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_word_count);
        let max_articles = env::var("STUDIO_MAX_ARTICLES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_articles);

        Self {
            min_word_count,
            max_articles,
            ..Self::default()
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_word_count: default_min_word_count(),
            max_articles: default_max_articles(),
            keep_generated: default_keep_generated(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            pause_ms: default_pause_ms(),
        }
    }
}
