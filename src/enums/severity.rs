use serde::Serialize;

/// Severity of a pipeline notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    /// Slack attachment color.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Info => "#36a64f",
            Self::Error => "#ff0000",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Info => "🤖",
            Self::Error => "❌",
        }
    }

    /// Value of the "Status" attachment field.
    pub const fn status(self) -> &'static str {
        match self {
            Self::Info => "Success",
            Self::Error => "Error",
        }
    }
}
