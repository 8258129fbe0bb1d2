use std::path::PathBuf;
use std::time::Duration;
use crate::structs::committer_identity::CommitterIdentity;
use crate::structs::push_target::PushTarget;

/// Fully resolved settings for one run.
///
/// Built once at process entry by `ConfigManager::resolve`; nothing past
/// that point reads the environment.
#[derive(Debug, Clone)]
pub struct RemediationConfig {
    pub ai: AiSettings,
    pub repository: RepositorySettings,
    pub notifications: NotificationSettings,
    pub log_path: PathBuf,
    pub strict_match: bool,
}

#[derive(Debug, Clone)]
pub struct AiSettings {
    pub api_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct RepositorySettings {
    pub path: PathBuf,
    pub push_target: PushTarget,
    pub committer: CommitterIdentity,
    pub vcs_token: Option<String>,
    pub git_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct NotificationSettings {
    /// `None` disables the webhook; outcomes are then only logged.
    pub webhook_url: Option<String>,
    pub timeout: Duration,
}
