use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use async_trait::async_trait;
use tokio::process::Command;
use crate::config::constants::PUSH_TOKEN_ENV_VARS;
use crate::errors::vcs_error::VcsError;
use crate::structs::command_output::CommandOutput;
use crate::structs::push_target::PushTarget;
use crate::traits::version_control::VersionControlClient;

/// `VersionControlClient` backed by the `git` executable.
///
/// Every invocation runs in the repository directory and is killed once
/// `timeout` elapses.
pub struct GitCli {
    repo_path: PathBuf,
    timeout: Duration,
    push_token: Option<String>,
}

impl GitCli {
    pub fn new(repo_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            repo_path: repo_path.into(),
            timeout,
            push_token: None,
        }
    }

    /// Token exported to the `git push` child for credential helpers.
    pub fn with_push_token(mut self, token: Option<String>) -> Self {
        self.push_token = token;
        self
    }

    async fn run_git(&self, args: &[&str], with_token: bool) -> Result<CommandOutput, VcsError> {
        let command = format!("git {}", args.join(" "));
        log::debug!("  $ {}", command);

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.repo_path)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        if with_token {
            if let Some(token) = &self.push_token {
                for var in PUSH_TOKEN_ENV_VARS {
                    cmd.env(var, token);
                }
            }
        }

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Err(_) => {
                return Err(VcsError::Timeout {
                    command,
                    timeout: self.timeout,
                })
            }
            Ok(Err(source)) => return Err(VcsError::Spawn { command, source }),
            Ok(Ok(output)) => output,
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[async_trait]
impl VersionControlClient for GitCli {
    async fn set_config(&self, key: &str, value: &str) -> Result<CommandOutput, VcsError> {
        self.run_git(&["config", "--local", key, value], false).await
    }

    async fn stage(&self, file_path: &str) -> Result<CommandOutput, VcsError> {
        self.run_git(&["add", "--", file_path], false).await
    }

    async fn commit(&self, message: &str, file_path: &str) -> Result<CommandOutput, VcsError> {
        self.run_git(&["commit", "-m", message, "--", file_path], false).await
    }

    async fn push(&self, target: &PushTarget) -> Result<CommandOutput, VcsError> {
        let target_args = target.push_args();
        let mut args = vec!["push"];
        args.extend(target_args.iter().map(String::as_str));
        self.run_git(&args, true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::process::Command as StdCommand;
    use tempfile::TempDir;

    fn git_available() -> bool {
        StdCommand::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    fn git(dir: &Path, args: &[&str]) -> String {
        let output = StdCommand::new("git").args(args).current_dir(dir).output().unwrap();
        assert!(output.status.success(), "git {args:?} failed: {}", String::from_utf8_lossy(&output.stderr));
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    fn init_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        git(dir.path(), &["init", "--quiet"]);
        fs::write(dir.path().join("calc.py"), "return 4\n").unwrap();
        dir
    }

    async fn commit_as_bot(client: &GitCli) {
        client.set_config("user.email", "bot@example.com").await.unwrap();
        client.set_config("user.name", "Bot").await.unwrap();
        client.set_config("commit.gpgsign", "false").await.unwrap();
        client.stage("calc.py").await.unwrap();
        client.commit("🤖 Auto-fix: fix return value", "calc.py").await.unwrap();
    }

    #[tokio::test]
    async fn test_stage_and_commit_with_local_identity() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        let client = GitCli::new(repo.path(), Duration::from_secs(30));

        commit_as_bot(&client).await;

        assert_eq!(git(repo.path(), &["log", "-1", "--format=%s"]), "🤖 Auto-fix: fix return value");
        assert_eq!(git(repo.path(), &["log", "-1", "--format=%ae"]), "bot@example.com");
        assert_eq!(git(repo.path(), &["config", "--local", "user.name"]), "Bot");
    }

    #[tokio::test]
    async fn test_push_to_bare_remote() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        let remote = TempDir::new().unwrap();
        git(remote.path(), &["init", "--bare", "--quiet"]);
        git(repo.path(), &["remote", "add", "origin", remote.path().to_str().unwrap()]);

        let client = GitCli::new(repo.path(), Duration::from_secs(30));
        commit_as_bot(&client).await;

        let target = PushTarget::new(Some("origin".to_string()), Some("HEAD".to_string()));
        client.push(&target).await.unwrap();

        let local_head = git(repo.path(), &["rev-parse", "HEAD"]);
        let remote_log = git(remote.path(), &["log", "--all", "--format=%H"]);
        assert!(remote_log.contains(&local_head));
    }

    #[tokio::test]
    async fn test_push_without_remote_fails_with_exit_code() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        let client = GitCli::new(repo.path(), Duration::from_secs(30));
        commit_as_bot(&client).await;

        let err = client.push(&PushTarget::default()).await.unwrap_err();
        assert!(matches!(err, VcsError::CommandFailed { code: Some(code), .. } if code != 0));
    }

    #[tokio::test]
    async fn test_commit_leaves_other_staged_files_alone() {
        if !git_available() {
            return;
        }
        let repo = init_repo();
        fs::write(repo.path().join("notes.txt"), "operator work in progress\n").unwrap();
        git(repo.path(), &["add", "notes.txt"]);

        let client = GitCli::new(repo.path(), Duration::from_secs(30));
        commit_as_bot(&client).await;

        assert_eq!(git(repo.path(), &["show", "--name-only", "--format=", "HEAD"]), "calc.py");
        assert_eq!(git(repo.path(), &["diff", "--cached", "--name-only"]), "notes.txt");
    }

    #[tokio::test]
    async fn test_missing_repository_directory_is_a_spawn_error() {
        let dir = TempDir::new().unwrap();
        let client = GitCli::new(dir.path().join("does-not-exist"), Duration::from_secs(5));

        let err = client.stage("calc.py").await.unwrap_err();
        assert!(matches!(err, VcsError::Spawn { .. }));
    }
}
