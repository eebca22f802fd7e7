//! Scored feedback on a user's translation or interpretation attempt,
//! obtained from an AI relay. The relay holds the provider credentials;
//! this crate only chooses a provider, builds the prompt, and turns the
//! free-form model output into a well-formed [`ScoredFeedback`].

mod client;
mod extract;
mod prompt;
mod relay;

pub use client::{FeedbackClient, FeedbackMode, FeedbackRequest};
pub use extract::{Extraction, extract_json_block};
pub use relay::{Provider, RelayModel};

/// Text completion capability. The fast and premium feedback paths are two
/// implementations of this, selected per submission.
#[async_trait::async_trait]
pub trait CompletionModel: Send + Sync {
    /// Run a single prompt to completion and return the raw model text.
    async fn complete(&self, prompt: &str, system_prompt: &str) -> Result<String, FeedbackError>;

    /// Display name shown next to the score ("GPT-5 mini", "Claude Sonnet").
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("relay error: {0}")]
    Api(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("unusable model response: {0}")]
    BadResponse(String),
}
