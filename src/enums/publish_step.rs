use std::fmt;

/// One version-control invocation made while publishing a fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    ConfigureEmail,
    ConfigureName,
    Stage,
    Commit,
    Push,
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ConfigureEmail => "configure committer email",
            Self::ConfigureName => "configure committer name",
            Self::Stage => "stage file",
            Self::Commit => "commit",
            Self::Push => "push",
        };
        f.write_str(label)
    }
}
