pub mod analysis_error;
pub mod apply_error;
pub mod config_error;
pub mod notify_error;
pub mod parse_error;
pub mod publish_error;
pub mod vcs_error;

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use crate::enums::pipeline_stage::PipelineStage;

pub use analysis_error::AnalysisError;
pub use apply_error::ApplyError;
pub use config_error::ConfigError;
pub use notify_error::NotifyError;
pub use parse_error::ParseError;
pub use publish_error::PublishError;
pub use vcs_error::VcsError;

/// Why a remediation run stopped before publishing.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("failed to read failure log '{}': {source}", .path.display())]
    Capture {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Apply(#[from] ApplyError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    /// Anything a stage did not anticipate, such as a panic.
    #[error("unexpected failure during {stage}: {message}")]
    Internal { stage: PipelineStage, message: String },
}

/// Exit code for failures nothing else classifies.
pub const INTERNAL_ERROR_EXIT_CODE: u8 = 70;

impl StageError {
    pub const fn stage(&self) -> PipelineStage {
        match self {
            Self::Capture { .. } => PipelineStage::Capturing,
            Self::Analysis(_) => PipelineStage::Analyzing,
            Self::Parse(_) => PipelineStage::Parsing,
            Self::Apply(_) => PipelineStage::Applying,
            Self::Publish(_) => PipelineStage::Publishing,
            Self::Internal { stage, .. } => *stage,
        }
    }

    /// Name of the error class, cited in notifications.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Capture { .. } => "CaptureError",
            Self::Analysis(_) => "AnalysisError",
            Self::Parse(_) => "ParseError",
            Self::Apply(ApplyError::Mismatch { .. }) => "MismatchError",
            Self::Apply(_) => "ApplyError",
            Self::Publish(_) => "PublishError",
            Self::Internal { .. } => "InternalError",
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Internal { .. } => INTERNAL_ERROR_EXIT_CODE,
            _ => self.stage().exit_code(),
        }
    }

    /// One-line operator summary of the failure.
    pub const fn headline(&self) -> &'static str {
        match self {
            Self::Capture { .. } => "Failed to read test failure log",
            Self::Analysis(AnalysisError::EmptyResponse) => "No fix suggested by AI",
            Self::Analysis(_) => "Failed to analyze test failure",
            Self::Parse(_) => "No usable fix suggested by AI",
            Self::Apply(_) => "Failed to apply fix",
            Self::Publish(_) => "Failed to push changes",
            Self::Internal { .. } => "Error in AI remediation",
        }
    }

    /// Publishing failures leave the applied edit on disk without a commit.
    pub const fn leaves_dirty_worktree(&self) -> bool {
        matches!(self, Self::Publish(_))
    }
}
