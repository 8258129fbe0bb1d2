use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    #[serde(default = "ConfigHelper::default_log_path")]
    pub log_path: PathBuf,

    /// Refuse to patch a line that does not hold the code the model quoted.
    #[serde(default = "ConfigHelper::default_true")]
    pub strict_match: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            log_path: ConfigHelper::default_log_path(),
            strict_match: true,
        }
    }
}
