use thiserror::Error;

/// The model output could not be turned into a `PatchSpec`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("model response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("model response must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("field '{field}' must be {expected}, found {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
