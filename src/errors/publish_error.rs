use thiserror::Error;
use crate::enums::publish_step::PublishStep;
use crate::errors::vcs_error::VcsError;

#[derive(Debug, Error)]
#[error("{step} failed: {source}")]
pub struct PublishError {
    pub step: PublishStep,
    #[source]
    pub source: VcsError,
}

impl PublishError {
    pub const fn new(step: PublishStep, source: VcsError) -> Self {
        Self { step, source }
    }
}
