use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Provider(#[from] AiProviderError),

    #[error("inference endpoint returned an empty completion")]
    EmptyResponse,
}
