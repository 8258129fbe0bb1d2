use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::slack_config::SlackConfig;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NotificationConfig {
    #[serde(default = "ConfigHelper::default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub slack: SlackConfig,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            slack: SlackConfig::default(),
        }
    }
}
