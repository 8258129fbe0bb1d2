use std::time::Duration;

pub const DEFAULT_MODEL: &str = "deepseek/deepseek-v3-0324";
pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/novita/v3/openai/chat/completions";

pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";
pub const MODEL_ENV: &str = "HUGGINGFACE_MODEL";
pub const API_URL_ENV: &str = "HUGGINGFACE_API_URL";
pub const VCS_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const SLACK_WEBHOOK_URL_ENV: &str = "SLACK_WEBHOOK_URL";
pub const REPO_PATH_ENV: &str = "REPO_PATH";

/// Variables credential helpers read a token from.
pub const PUSH_TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

pub const DEFAULT_REPO_PATH: &str = ".";
pub const DEFAULT_LOG_PATH: &str = "test-results.log";

pub const DEFAULT_COMMITTER_NAME: &str = "AI Remediator";
pub const DEFAULT_COMMITTER_EMAIL: &str = "ai-remediator@example.com";
pub const COMMIT_MESSAGE_PREFIX: &str = "🤖 Auto-fix: ";

pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_GIT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

pub const CONFIG_DIR_NAME: &str = "ai-remediator";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Exit code when the run could not start because of bad configuration.
pub const CONFIG_ERROR_EXIT_CODE: u8 = 78;

pub const SUCCESS_MESSAGE: &str = "Fix applied and pushed successfully!";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
