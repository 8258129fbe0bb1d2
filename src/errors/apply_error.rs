use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("file does not exist: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("path '{path}' is outside the repository: {reason}")]
    OutsideRepository { path: String, reason: String },

    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line_number} is out of range for '{}' (file has {line_count} lines)", .path.display())]
    LineOutOfRange {
        path: PathBuf,
        line_number: usize,
        line_count: usize,
    },

    /// The target line no longer holds the code the model saw.
    #[error("line {line_number} of '{}' does not match the expected code\nExpected: '{expected}'\nActual: '{actual}'", .path.display())]
    Mismatch {
        path: PathBuf,
        line_number: usize,
        expected: String,
        actual: String,
    },
}
