use crate::config::constants::SUCCESS_MESSAGE;
use crate::enums::pipeline_stage::PipelineStage;
use crate::enums::severity::Severity;
use crate::errors::StageError;
use crate::structs::applied_patch::AppliedPatch;
use crate::structs::patch_spec::PatchSpec;
use crate::structs::publish_receipt::PublishReceipt;

/// Terminal result of one remediation run.
#[derive(Debug)]
pub enum RunOutcome {
    Succeeded {
        patch: PatchSpec,
        applied: AppliedPatch,
        receipt: PublishReceipt,
    },
    Failed {
        error: StageError,
    },
}

impl RunOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub const fn severity(&self) -> Severity {
        match self {
            Self::Succeeded { .. } => Severity::Info,
            Self::Failed { .. } => Severity::Error,
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Succeeded { .. } => 0,
            Self::Failed { error } => error.exit_code(),
        }
    }

    /// Stage the run stopped in, `None` on success.
    pub const fn failed_stage(&self) -> Option<PipelineStage> {
        match self {
            Self::Succeeded { .. } => None,
            Self::Failed { error } => Some(error.stage()),
        }
    }

    /// Human-readable text for the notification and the final log line.
    pub fn summary(&self) -> String {
        match self {
            Self::Succeeded { patch, applied, .. } => format!(
                "{} ({}:{}: {})",
                SUCCESS_MESSAGE,
                applied.relative_path.display(),
                applied.line_number,
                patch.explanation()
            ),
            Self::Failed { error } => {
                let mut summary = format!("{} [{}]: {}", error.headline(), error.kind(), error);
                if error.leaves_dirty_worktree() {
                    summary.push_str(" (the fix is applied in the working tree but not committed)");
                }
                summary
            }
        }
    }
}
