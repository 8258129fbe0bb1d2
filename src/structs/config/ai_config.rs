use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    /// Full chat-completions endpoint URL.
    #[serde(default = "ConfigHelper::default_api_url")]
    pub api_url: String,

    /// Overrides `api_url` when set in the environment.
    #[serde(default = "ConfigHelper::default_api_url_env")]
    pub api_url_env: Option<String>,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_model_env")]
    pub model_env: Option<String>,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_ai_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub max_tokens: Option<u32>,

    #[serde(default)]
    pub temperature: Option<f32>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: ConfigHelper::default_api_url(),
            api_url_env: ConfigHelper::default_api_url_env(),
            model: ConfigHelper::default_model(),
            model_env: ConfigHelper::default_model_env(),
            api_key_env: ConfigHelper::default_api_key_env(),
            timeout_secs: ConfigHelper::default_ai_timeout_secs(),
            max_tokens: None,
            temperature: None,
        }
    }
}
