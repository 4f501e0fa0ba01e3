//! Lead storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::default_true;

/// Where and how leads are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding every lead
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Read a missing data file as the demo lead set instead of an empty list
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/leads.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            seed_demo_data: true,
        }
    }
}
