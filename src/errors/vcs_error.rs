use std::io;
use std::time::Duration;
use thiserror::Error;

/// A version-control invocation that did not succeed.
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("`{command}` exited with {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("code {c}"))
}
