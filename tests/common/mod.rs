use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use ai_remediator::enums::ai_provider_error::AiProviderError;
use ai_remediator::enums::publish_step::PublishStep;
use ai_remediator::enums::severity::Severity;
use ai_remediator::errors::{NotifyError, VcsError};
use ai_remediator::services::failure_analyzer::FailureAnalyzer;
use ai_remediator::services::notification::notifier::Notifier;
use ai_remediator::services::patch_applier::PatchApplier;
use ai_remediator::services::publisher::Publisher;
use ai_remediator::services::remediation_pipeline::RemediationPipeline;
use ai_remediator::structs::command_output::CommandOutput;
use ai_remediator::structs::committer_identity::CommitterIdentity;
use ai_remediator::structs::push_target::PushTarget;
use ai_remediator::traits::ai_provider::AiProvider;
use ai_remediator::traits::notify_channel::NotifyChannel;
use ai_remediator::traits::version_control::VersionControlClient;
use tempfile::TempDir;

pub const LOG_FILE: &str = "test-results.log";

pub const CALC_PY: &str = "\
import math


def add(a, b):
    return a + b


def five():
    # expected to return 5
    return 4


";

pub struct StubProvider {
    reply: Result<String, AiProviderError>,
    pub calls: Mutex<usize>,
}

impl StubProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(0),
        })
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: Mutex::new(0),
        })
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn chat(&self, _system_prompt: String, _user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        *self.calls.lock().unwrap() += 1;
        self.reply.clone()
    }
}

/// Records every version-control call; optionally fails or panics at one step.
#[derive(Default)]
pub struct RecordingVcs {
    pub calls: Mutex<Vec<String>>,
    fail_at: Option<PublishStep>,
    panic_at: Option<PublishStep>,
}

impl RecordingVcs {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_at(step: PublishStep) -> Arc<Self> {
        Arc::new(Self {
            fail_at: Some(step),
            ..Default::default()
        })
    }

    pub fn panicking_at(step: PublishStep) -> Arc<Self> {
        Arc::new(Self {
            panic_at: Some(step),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, step: PublishStep, call: String) -> Result<CommandOutput, VcsError> {
        if self.panic_at == Some(step) {
            panic!("vcs stub panicked during {step}");
        }
        self.calls.lock().unwrap().push(call.clone());
        if self.fail_at == Some(step) {
            return Err(VcsError::CommandFailed {
                command: call,
                code: Some(128),
                stderr: "remote rejected".to_string(),
            });
        }
        Ok(CommandOutput::default())
    }
}

#[async_trait]
impl VersionControlClient for RecordingVcs {
    async fn set_config(&self, key: &str, value: &str) -> Result<CommandOutput, VcsError> {
        let step = if key == "user.email" {
            PublishStep::ConfigureEmail
        } else {
            PublishStep::ConfigureName
        };
        self.record(step, format!("git config {key} {value}"))
    }

    async fn stage(&self, file_path: &str) -> Result<CommandOutput, VcsError> {
        self.record(PublishStep::Stage, format!("git add {file_path}"))
    }

    async fn commit(&self, message: &str, file_path: &str) -> Result<CommandOutput, VcsError> {
        self.record(PublishStep::Commit, format!("git commit -m {message} -- {file_path}"))
    }

    async fn push(&self, target: &PushTarget) -> Result<CommandOutput, VcsError> {
        self.record(PublishStep::Push, format!("git push {}", target.push_args().join(" ")).trim_end().to_string())
    }
}

#[derive(Default)]
pub struct RecordingChannel {
    pub sent: Mutex<Vec<(String, Severity)>>,
}

impl RecordingChannel {
    pub fn sent(&self) -> Vec<(String, Severity)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifyChannel for RecordingChannel {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, message: &str, severity: Severity) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push((message.to_string(), severity));
        Ok(())
    }
}

/// Scratch repository holding `calc.py` and a failure log.
pub fn scratch_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("calc.py"), CALC_PY).unwrap();
    fs::write(
        dir.path().join(LOG_FILE),
        "FAILED test_calc.py::test_five - AssertionError: assert 4 == 5\n",
    )
    .unwrap();
    dir
}

pub fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

pub struct Harness {
    pub pipeline: RemediationPipeline,
    pub provider: Arc<StubProvider>,
    pub vcs: Arc<RecordingVcs>,
    pub channel: Arc<RecordingChannel>,
}

pub fn harness(repo: &Path, provider: Arc<StubProvider>, vcs: Arc<RecordingVcs>, strict_match: bool) -> Harness {
    let channel = Arc::new(RecordingChannel::default());
    let pipeline = RemediationPipeline::new(
        repo.join(LOG_FILE),
        FailureAnalyzer::new(provider.clone()),
        PatchApplier::new(repo, strict_match),
        Publisher::new(vcs.clone(), CommitterIdentity::default(), PushTarget::default()),
        Notifier::with_channels(vec![channel.clone()]),
    );

    Harness {
        pipeline,
        provider,
        vcs,
        channel,
    }
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git").args(args).current_dir(dir).output().unwrap();
    assert!(output.status.success(), "git {args:?} failed: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
