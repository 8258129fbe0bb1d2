use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::notification_config::NotificationConfig;
use crate::structs::config::pipeline_config::PipelineConfig;
use crate::structs::config::repository_config::RepositoryConfig;

/// On-disk configuration, as read from `config.toml`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}
