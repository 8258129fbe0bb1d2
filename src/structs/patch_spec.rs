use std::num::NonZeroUsize;
use serde::Serialize;

/// One proposed single-line fix.
///
/// Built by `PatchParser` from model output and never mutated afterwards;
/// fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchSpec {
    file_path: String,
    line_number: NonZeroUsize,
    current_code: String,
    fixed_code: String,
    explanation: String,
}

impl PatchSpec {
    pub fn new(
        file_path: impl Into<String>,
        line_number: NonZeroUsize,
        current_code: impl Into<String>,
        fixed_code: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            current_code: current_code.into(),
            fixed_code: fixed_code.into(),
            explanation: explanation.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// 1-based index of the line to replace.
    pub const fn line_number(&self) -> usize {
        self.line_number.get()
    }

    /// Code the model expects on the target line. Empty when the model omitted it.
    pub fn current_code(&self) -> &str {
        &self.current_code
    }

    pub fn fixed_code(&self) -> &str {
        &self.fixed_code
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
