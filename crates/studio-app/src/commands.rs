use anyhow::Context;
use chrono::NaiveDate;
use studio_config::Config;
use studio_feedback::{FeedbackClient, Provider, RelayModel};
use studio_store::StudioStore;

pub mod archive;
pub mod articles;
pub mod data;
pub mod gacha;
pub mod practice;
pub mod quiz;
pub mod stats;
pub mod vocab;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn open_store(config: &Config) -> anyhow::Result<StudioStore> {
    let path = config.storage.state_path();
    StudioStore::open(&path)
        .with_context(|| format!("failed to open state at {}", path.display()))
}

/// Assemble the fast and premium feedback paths from config. An empty
/// relay URL still builds; calls through it degrade to default feedback.
pub fn feedback_client(config: &Config) -> FeedbackClient {
    let fast = RelayModel::new(
        config.relay.url.clone(),
        Provider::Gpt,
        config.feedback.fast_model.clone(),
        config.feedback.max_tokens,
        config.feedback.fast_model.clone(),
    );
    let premium = RelayModel::new(
        config.relay.url.clone(),
        Provider::Claude,
        config.feedback.premium_model.clone(),
        config.feedback.max_tokens,
        config.feedback.premium_model.clone(),
    );
    FeedbackClient::new(Box::new(fast), Box::new(premium))
}
