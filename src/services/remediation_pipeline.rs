use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::Arc;
use chrono::Utc;
use futures::FutureExt;
use uuid::Uuid;
use crate::enums::pipeline_stage::PipelineStage;
use crate::enums::pipeline_state::PipelineState;
use crate::enums::run_outcome::RunOutcome;
use crate::enums::severity::Severity;
use crate::errors::StageError;
use crate::logger::patch_logger::PatchLogger;
use crate::services::ai_providers::chat_completions::ChatCompletionsProvider;
use crate::services::failure_analyzer::FailureAnalyzer;
use crate::services::git_client::GitCli;
use crate::services::notification::notifier::Notifier;
use crate::services::patch_applier::PatchApplier;
use crate::services::patch_parser::PatchParser;
use crate::services::publisher::Publisher;
use crate::structs::applied_patch::AppliedPatch;
use crate::structs::config::remediation_config::RemediationConfig;
use crate::structs::patch_spec::PatchSpec;
use crate::structs::publish_receipt::PublishReceipt;

/// Capture → analyze → parse → apply → publish, then notify once.
///
/// Every stage runs exactly once and the first failure ends the run. Whatever
/// happens, including a panic inside a stage, `run` returns a `RunOutcome`
/// and the notifier is called exactly once.
pub struct RemediationPipeline {
    log_path: PathBuf,
    analyzer: FailureAnalyzer,
    applier: PatchApplier,
    publisher: Publisher,
    notifier: Notifier,
    state: PipelineState,
}

impl RemediationPipeline {
    pub fn new(
        log_path: impl Into<PathBuf>,
        analyzer: FailureAnalyzer,
        applier: PatchApplier,
        publisher: Publisher,
        notifier: Notifier,
    ) -> Self {
        Self {
            log_path: log_path.into(),
            analyzer,
            applier,
            publisher,
            notifier,
            state: PipelineState::Idle,
        }
    }

    /// Wire the production components: HTTP inference, `git` and Slack.
    pub fn from_config(config: &RemediationConfig) -> Self {
        let repository = &config.repository;

        let provider = Arc::new(ChatCompletionsProvider::from_settings(&config.ai));
        let vcs = Arc::new(
            GitCli::new(&repository.path, repository.git_timeout).with_push_token(repository.vcs_token.clone()),
        );

        Self::new(
            &config.log_path,
            FailureAnalyzer::new(provider),
            PatchApplier::new(&repository.path, config.strict_match),
            Publisher::new(vcs, repository.committer.clone(), repository.push_target.clone()),
            Notifier::from_settings(&config.notifications),
        )
    }

    pub const fn state(&self) -> PipelineState {
        self.state
    }

    pub async fn run(&mut self) -> RunOutcome {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        log::info!("🚀 Starting remediation run {} for {}", run_id, self.log_path.display());

        let result = AssertUnwindSafe(self.execute()).catch_unwind().await;

        let outcome = match result {
            Ok(Ok((patch, applied, receipt))) => RunOutcome::Succeeded { patch, applied, receipt },
            Ok(Err(error)) => RunOutcome::Failed { error },
            Err(payload) => {
                let stage = self.state.current_stage().unwrap_or(PipelineStage::Capturing);
                RunOutcome::Failed {
                    error: StageError::Internal {
                        stage,
                        message: panic_message(payload.as_ref()),
                    },
                }
            }
        };

        self.state = match outcome.failed_stage() {
            None => PipelineState::Succeeded,
            Some(stage) => PipelineState::Failed(stage),
        };

        let summary = outcome.summary();
        let elapsed_ms = (Utc::now() - started_at).num_milliseconds();
        match outcome.severity() {
            Severity::Info => log::info!("✅ {} ({} ms)", summary, elapsed_ms),
            Severity::Error => log::error!("❌ {} ({} ms)", summary, elapsed_ms),
        }

        self.notifier.notify(&summary, outcome.severity()).await;
        outcome
    }

    fn enter(&mut self, stage: PipelineStage) {
        log::info!("{} Stage: {}", stage.emoji(), stage);
        self.state = PipelineState::Running(stage);
    }

    async fn execute(&mut self) -> Result<(PatchSpec, AppliedPatch, PublishReceipt), StageError> {
        self.enter(PipelineStage::Capturing);
        let log_content = tokio::fs::read_to_string(&self.log_path)
            .await
            .map_err(|source| StageError::Capture {
                path: self.log_path.clone(),
                source,
            })?;

        self.enter(PipelineStage::Analyzing);
        let response = self.analyzer.analyze(&log_content).await?;

        self.enter(PipelineStage::Parsing);
        let patch = PatchParser::parse(&response)?;

        self.enter(PipelineStage::Applying);
        let applied = self.applier.apply(&patch)?;
        PatchLogger::print_diff_preview(&applied);

        self.enter(PipelineStage::Publishing);
        let receipt = self.publisher.publish(&patch, &applied).await?;

        Ok((patch, applied, receipt))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic with a non-string payload".to_string())
}
