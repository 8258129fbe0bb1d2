use async_trait::async_trait;
use crate::enums::severity::Severity;
use crate::errors::notify_error::NotifyError;

/// Trait for notification channels (Slack, etc.).
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, message: &str, severity: Severity) -> Result<(), NotifyError>;
}
