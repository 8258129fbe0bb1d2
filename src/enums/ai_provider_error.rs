use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Inference API Error: {0}")]
    ApiError(String),

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    #[error("Authentication Error: {0}")]
    AuthenticationError(String),

    #[error("Inference request timed out after {0:?}")]
    Timeout(Duration),
}

impl AiProviderError {
    pub fn from_reqwest(error: &reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            Self::Timeout(timeout)
        } else if error.is_decode() {
            Self::SerializationError(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}
