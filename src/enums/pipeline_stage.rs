use std::fmt;
use serde::Serialize;

/// A stage of a remediation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PipelineStage {
    Capturing,
    Analyzing,
    Parsing,
    Applying,
    Publishing,
}

impl PipelineStage {
    /// Process exit code reported when a run terminates in this stage.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Capturing => 2,
            Self::Analyzing => 3,
            Self::Parsing => 4,
            Self::Applying => 5,
            Self::Publishing => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Capturing => "capture",
            Self::Analyzing => "analyze",
            Self::Parsing => "parse",
            Self::Applying => "apply",
            Self::Publishing => "publish",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Capturing => "📥",
            Self::Analyzing => "🧠",
            Self::Parsing => "🧩",
            Self::Applying => "🔧",
            Self::Publishing => "🚀",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
