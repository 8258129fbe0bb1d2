use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    #[serde(default = "ConfigHelper::default_repo_path")]
    pub path: String,

    /// Overrides `path` when set in the environment.
    #[serde(default = "ConfigHelper::default_repo_path_env")]
    pub path_env: Option<String>,

    #[serde(default)]
    pub remote: Option<String>,

    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default = "ConfigHelper::default_committer_name")]
    pub committer_name: String,

    #[serde(default = "ConfigHelper::default_committer_email")]
    pub committer_email: String,

    #[serde(default = "ConfigHelper::default_token_env")]
    pub token_env: Option<String>,

    #[serde(default = "ConfigHelper::default_git_timeout_secs")]
    pub git_timeout_secs: u64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: ConfigHelper::default_repo_path(),
            path_env: ConfigHelper::default_repo_path_env(),
            remote: None,
            branch: None,
            committer_name: ConfigHelper::default_committer_name(),
            committer_email: ConfigHelper::default_committer_email(),
            token_env: ConfigHelper::default_token_env(),
            git_timeout_secs: ConfigHelper::default_git_timeout_secs(),
        }
    }
}
