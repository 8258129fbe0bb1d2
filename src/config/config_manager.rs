use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{timeout_duration_secs, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::config_error::ConfigError;
use crate::structs::committer_identity::CommitterIdentity;
use crate::structs::config::config::Config;
use crate::structs::config::remediation_config::{
    AiSettings, NotificationSettings, RemediationConfig, RepositorySettings,
};
use crate::structs::push_target::PushTarget;

const SAMPLE_CONFIG: &str = r#"# AI Remediator configuration
#
# Secrets are never stored here: each *_env key names the environment
# variable the value is read from when a run starts.

[ai]
# OpenAI-compatible chat-completions endpoint
api_url = "https://router.huggingface.co/novita/v3/openai/chat/completions"
# Environment variable that overrides api_url when set
api_url_env = "HUGGINGFACE_API_URL"
model = "deepseek/deepseek-v3-0324"
model_env = "HUGGINGFACE_MODEL"
api_key_env = "HUGGINGFACE_API_KEY"
timeout_secs = 120
# max_tokens = 1024
# temperature = 0.0

[repository]
# Working tree the fix is applied to and pushed from
path = "."
path_env = "REPO_PATH"
# Leave remote and branch unset to push to the upstream of the current branch
# remote = "origin"
# branch = "main"
committer_name = "AI Remediator"
committer_email = "ai-remediator@example.com"
# Exported to `git push` as GITHUB_TOKEN / GH_TOKEN for credential helpers
token_env = "GITHUB_TOKEN"
git_timeout_secs = 60

[notifications]
enabled = true

[notifications.slack]
webhook_url_env = "SLACK_WEBHOOK_URL"
timeout_secs = 10

[pipeline]
log_path = "test-results.log"
# Refuse to patch a line that does not contain the code the model quoted
strict_match = true
"#;

pub struct ConfigManager;

impl ConfigManager {
    /// `~/ai-remediator/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// A missing default file yields `Config::default()`; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::load_from(&path),
            Ok(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(ConfigError::NoHomeDir) => {
                log::debug!("No home directory, using default configuration");
                Ok(Config::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
    }

    /// Resolve against the process environment.
    pub fn resolve(config: &Config) -> Result<RemediationConfig, ConfigError> {
        Self::resolve_with(config, |var| std::env::var(var).ok())
    }

    /// Read every secret and override from `env` once and produce the
    /// settings the pipeline runs with.
    pub fn resolve_with<F>(config: &Config, env: F) -> Result<RemediationConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::validate_config(config).map_err(ConfigError::Invalid)?;

        let lookup = |var: &str| env(var).filter(|value| !value.trim().is_empty());
        let lookup_opt = |var: &Option<String>| var.as_deref().and_then(&lookup);

        let ai = &config.ai;
        let api_key = lookup(&ai.api_key_env).ok_or_else(|| ConfigError::MissingEnv {
            var: ai.api_key_env.clone(),
            field: "ai.api_key_env",
        })?;

        let api_url = lookup_opt(&ai.api_url_env).unwrap_or_else(|| ai.api_url.clone());
        if !is_http_url(&api_url) {
            return Err(ConfigError::Invalid(vec![format!(
                "Inference API URL must be an http(s) URL: {api_url}"
            )]));
        }

        let repository = &config.repository;
        let repo_path = PathBuf::from(lookup_opt(&repository.path_env).unwrap_or_else(|| repository.path.clone()));
        if !repo_path.is_dir() {
            return Err(ConfigError::Invalid(vec![format!(
                "Repository path does not exist or is not a directory: {}",
                repo_path.display()
            )]));
        }

        let vcs_token = lookup_opt(&repository.token_env);
        if vcs_token.is_none() {
            if let Some(var) = &repository.token_env {
                log::warn!("⚠️ {} is not set; git push will rely on existing credentials", var);
            }
        }

        let webhook_url = if config.notifications.enabled {
            let url = lookup(&config.notifications.slack.webhook_url_env);
            if url.is_none() {
                log::info!(
                    "{} is not set; notifications will only be logged",
                    config.notifications.slack.webhook_url_env
                );
            }
            url
        } else {
            None
        };

        Ok(RemediationConfig {
            ai: AiSettings {
                api_url,
                model: lookup_opt(&ai.model_env).unwrap_or_else(|| ai.model.clone()),
                api_key,
                timeout: timeout_duration_secs(ai.timeout_secs),
                max_tokens: ai.max_tokens,
                temperature: ai.temperature,
            },
            repository: RepositorySettings {
                path: repo_path,
                push_target: PushTarget::new(repository.remote.clone(), repository.branch.clone()),
                committer: CommitterIdentity {
                    name: repository.committer_name.clone(),
                    email: repository.committer_email.clone(),
                },
                vcs_token,
                git_timeout: timeout_duration_secs(repository.git_timeout_secs),
            },
            notifications: NotificationSettings {
                webhook_url,
                timeout: timeout_duration_secs(config.notifications.slack.timeout_secs),
            },
            log_path: config.pipeline.log_path.clone(),
            strict_match: config.pipeline.strict_match,
        })
    }

    /// Report every structural problem at once.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let ai = &config.ai;
        if !is_http_url(&ai.api_url) {
            errors.push(format!("ai.api_url must be an http(s) URL: {}", ai.api_url));
        }
        if ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }
        if ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }
        if ai.timeout_secs == 0 {
            errors.push("ai.timeout_secs must be greater than zero".to_string());
        }
        if let Some(temperature) = ai.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                errors.push(format!("ai.temperature must be between 0.0 and 2.0: {temperature}"));
            }
        }

        let repository = &config.repository;
        if repository.path.trim().is_empty() {
            errors.push("repository.path must not be empty".to_string());
        }
        if repository.committer_name.trim().is_empty() {
            errors.push("repository.committer_name must not be empty".to_string());
        }
        if !repository.committer_email.contains('@') {
            errors.push(format!(
                "repository.committer_email is not an email address: {}",
                repository.committer_email
            ));
        }
        for (field, value) in [("remote", &repository.remote), ("branch", &repository.branch)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                errors.push(format!("repository.{field} must not be empty when set"));
            }
        }
        if repository.git_timeout_secs == 0 {
            errors.push("repository.git_timeout_secs must be greater than zero".to_string());
        }

        let slack = &config.notifications.slack;
        if config.notifications.enabled && slack.webhook_url_env.trim().is_empty() {
            errors.push("notifications.slack.webhook_url_env must name an environment variable".to_string());
        }
        if slack.timeout_secs == 0 {
            errors.push("notifications.slack.timeout_secs must be greater than zero".to_string());
        }

        if config.pipeline.log_path.as_os_str().is_empty() {
            errors.push("pipeline.log_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn create_sample_config(path: &Path, force: bool) -> Result<(), ConfigError> {
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }

        let write_error = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(path, SAMPLE_CONFIG).map_err(write_error)?;

        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
