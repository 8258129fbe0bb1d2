use crate::config::constants::{DEFAULT_COMMITTER_EMAIL, DEFAULT_COMMITTER_NAME};

/// Bot identity written into the repository's local git config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitterIdentity {
    pub name: String,
    pub email: String,
}

impl Default for CommitterIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMMITTER_NAME.to_string(),
            email: DEFAULT_COMMITTER_EMAIL.to_string(),
        }
    }
}
