use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SlackConfig {
    #[serde(default = "ConfigHelper::default_webhook_url_env")]
    pub webhook_url_env: String,

    #[serde(default = "ConfigHelper::default_webhook_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url_env: ConfigHelper::default_webhook_url_env(),
            timeout_secs: ConfigHelper::default_webhook_timeout_secs(),
        }
    }
}
