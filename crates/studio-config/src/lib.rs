use serde::{Deserialize, Serialize};

use self::articles::ArticlesConfig;
use self::feedback::FeedbackConfig;
use self::generator::GeneratorConfig;
use self::relay::RelayConfig;
use self::storage::StorageConfig;

pub mod articles;
pub mod feedback;
pub mod generator;
pub mod relay;
pub mod storage;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relay: RelayConfig,
    pub feedback: FeedbackConfig,
    pub articles: ArticlesConfig,
    pub storage: StorageConfig,
    pub generator: GeneratorConfig,
}

impl Config {
    /// Build a config from defaults plus environment overrides.
    pub fn new() -> Self {
        Config {
            relay: RelayConfig::new(),
            feedback: FeedbackConfig::new(),
            articles: ArticlesConfig::new(),
            storage: StorageConfig::new(),
            generator: GeneratorConfig::new(),
        }
    }
}
