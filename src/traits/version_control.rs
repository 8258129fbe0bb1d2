use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use crate::errors::vcs_error::VcsError;
use crate::structs::command_output::CommandOutput;
use crate::structs::push_target::PushTarget;

/// The version-control operations a publish needs.
///
/// `GitCli` shells out to `git`; tests substitute a stub so no external
/// process runs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VersionControlClient: Send + Sync {
    /// Set a repository-scoped config value, e.g. `user.email`.
    async fn set_config(&self, key: &str, value: &str) -> Result<CommandOutput, VcsError>;

    async fn stage(&self, file_path: &str) -> Result<CommandOutput, VcsError>;

    /// Commit only `file_path`, leaving anything else in the index alone.
    async fn commit(&self, message: &str, file_path: &str) -> Result<CommandOutput, VcsError>;

    async fn push(&self, target: &PushTarget) -> Result<CommandOutput, VcsError>;
}
