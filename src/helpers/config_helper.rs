use std::path::PathBuf;
use crate::config::constants::{
    API_KEY_ENV, API_URL_ENV, DEFAULT_AI_TIMEOUT_SECS, DEFAULT_API_URL, DEFAULT_COMMITTER_EMAIL,
    DEFAULT_COMMITTER_NAME, DEFAULT_GIT_TIMEOUT_SECS, DEFAULT_LOG_PATH, DEFAULT_MODEL,
    DEFAULT_REPO_PATH, DEFAULT_WEBHOOK_TIMEOUT_SECS, MODEL_ENV, REPO_PATH_ENV,
    SLACK_WEBHOOK_URL_ENV, VCS_TOKEN_ENV,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_api_url() -> String {
        DEFAULT_API_URL.to_string()
    }

    pub fn default_api_url_env() -> Option<String> {
        Some(API_URL_ENV.to_string())
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_model_env() -> Option<String> {
        Some(MODEL_ENV.to_string())
    }

    pub fn default_api_key_env() -> String {
        API_KEY_ENV.to_string()
    }

    pub fn default_ai_timeout_secs() -> u64 {
        DEFAULT_AI_TIMEOUT_SECS
    }

    pub fn default_repo_path() -> String {
        DEFAULT_REPO_PATH.to_string()
    }

    pub fn default_repo_path_env() -> Option<String> {
        Some(REPO_PATH_ENV.to_string())
    }

    pub fn default_committer_name() -> String {
        DEFAULT_COMMITTER_NAME.to_string()
    }

    pub fn default_committer_email() -> String {
        DEFAULT_COMMITTER_EMAIL.to_string()
    }

    pub fn default_token_env() -> Option<String> {
        Some(VCS_TOKEN_ENV.to_string())
    }

    pub fn default_git_timeout_secs() -> u64 {
        DEFAULT_GIT_TIMEOUT_SECS
    }

    pub fn default_webhook_url_env() -> String {
        SLACK_WEBHOOK_URL_ENV.to_string()
    }

    pub fn default_webhook_timeout_secs() -> u64 {
        DEFAULT_WEBHOOK_TIMEOUT_SECS
    }

    pub fn default_log_path() -> PathBuf {
        PathBuf::from(DEFAULT_LOG_PATH)
    }

    pub fn default_true() -> bool {
        true
    }
}
