use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    "studio-data".to_string()
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the persisted progression state
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("STUDIO_DATA_DIR").unwrap_or_else(|_| default_data_dir());

        Self { data_dir }
    }

    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("state.json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}
