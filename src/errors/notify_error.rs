use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when delivering a notification.
///
/// These never leave the `Notifier`; they are logged and dropped.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("webhook timed out after {0:?}")]
    Timeout(Duration),

    #[error("channel panicked while sending")]
    Panicked,
}
