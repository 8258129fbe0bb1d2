use std::path::{Path, PathBuf};
use std::time::Instant;
use anyhow::Context;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::config_error::ConfigError;
use crate::services::remediation_pipeline::RemediationPipeline;
use crate::structs::config::config::Config;

/// Dispatches CLI subcommands.
///
/// Returns the process exit code; an `Err` means the configuration could not
/// be loaded, written or resolved.
pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub const fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> anyhow::Result<u8> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { config, force } => self.init_command(config, force),
            Commands::Run { log, config, no_strict } => self.run_remediation(log, config, no_strict).await,
            Commands::Validate { config } => self.validate_command(config),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self, config: Option<PathBuf>, force: bool) -> anyhow::Result<u8> {
        log::info!("🚀 Initializing ai-remediator configuration...");

        let path = match config {
            Some(path) => path,
            None => ConfigManager::default_config_path()?,
        };

        ConfigManager::create_sample_config(&path, force)
            .with_context(|| format!("could not create {}", path.display()))?;

        log::info!("📝 Set HUGGINGFACE_API_KEY (and optionally GITHUB_TOKEN, SLACK_WEBHOOK_URL) before running.");
        log::info!("🔧 Run 'ai-remediator validate' to check your configuration.");
        Ok(0)
    }

    async fn run_remediation(&self, log_path: Option<PathBuf>, config_path: Option<PathBuf>, no_strict: bool) -> anyhow::Result<u8> {
        let mut config = Self::load_config(config_path.as_deref())?;

        if let Some(log_path) = log_path {
            config.pipeline.log_path = log_path;
        }
        if no_strict {
            log::warn!("⚠️ Strict line matching disabled");
            config.pipeline.strict_match = false;
        }

        let resolved = ConfigManager::resolve(&config).context("configuration is not usable")?;
        log::info!("🤖 Model: {} | Repository: {}", resolved.ai.model, resolved.repository.path.display());

        let mut pipeline = RemediationPipeline::from_config(&resolved);
        let outcome = pipeline.run().await;

        Ok(outcome.exit_code())
    }

    fn validate_command(&self, config_path: Option<PathBuf>) -> anyhow::Result<u8> {
        log::info!("🔍 Validating ai-remediator configuration...");

        let config = Self::load_config(config_path.as_deref())?;
        log::info!("✅ Configuration file loaded successfully");

        let resolved = ConfigManager::resolve(&config)?;
        log::info!("✅ Configuration is valid");

        Self::perform_extended_validation(&resolved.repository.path, resolved.notifications.webhook_url.is_some());
        Ok(0)
    }

    fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
        ConfigManager::load(path).map_err(|e| {
            if matches!(e, ConfigError::Read { .. }) {
                log::error!("💡 Run 'ai-remediator init' to create a configuration file.");
            }
            anyhow::Error::new(e)
        })
    }

    fn perform_extended_validation(repo_path: &Path, has_webhook: bool) {
        let mut warnings = Vec::new();

        if !repo_path.join(".git").exists() {
            warnings.push(format!("Repository may not be a git repository: {}", repo_path.display()));
        }
        if !has_webhook {
            warnings.push("No webhook configured: outcomes will only be logged".to_string());
        }

        if warnings.is_empty() {
            log::info!("✅ Extended validation passed - no issues found");
        } else {
            log::info!("⚠️ Warnings:");
            for warning in &warnings {
                log::info!("   - {}", warning);
            }
        }
    }
}
