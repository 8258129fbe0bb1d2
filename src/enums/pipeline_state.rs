use crate::enums::pipeline_stage::PipelineStage;

/// Where a `RemediationPipeline` currently is.
///
/// `Succeeded` and `Failed` are the two shapes of the terminal `Done` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    #[default]
    Idle,
    Running(PipelineStage),
    Succeeded,
    Failed(PipelineStage),
}

impl PipelineState {
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }

    pub const fn current_stage(self) -> Option<PipelineStage> {
        match self {
            Self::Running(stage) | Self::Failed(stage) => Some(stage),
            Self::Idle | Self::Succeeded => None,
        }
    }
}
