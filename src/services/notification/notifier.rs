use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::FutureExt;
use crate::enums::severity::Severity;
use crate::errors::notify_error::NotifyError;
use crate::services::notification::slack_channel::SlackChannel;
use crate::structs::config::remediation_config::NotificationSettings;
use crate::traits::notify_channel::NotifyChannel;

/// Delivers run outcomes to every configured channel.
///
/// Delivery problems are logged and swallowed; `notify` never fails.
pub struct Notifier {
    channels: Vec<Arc<dyn NotifyChannel>>,
}

impl Notifier {
    pub fn with_channels(channels: Vec<Arc<dyn NotifyChannel>>) -> Self {
        Self { channels }
    }

    /// Outcomes are only written to the local log.
    pub const fn disabled() -> Self {
        Self { channels: vec![] }
    }

    pub fn from_settings(settings: &NotificationSettings) -> Self {
        match &settings.webhook_url {
            Some(url) => {
                log::debug!("Slack notifications enabled");
                Self::with_channels(vec![Arc::new(SlackChannel::new(url.clone(), settings.timeout))])
            }
            None => {
                log::debug!("No webhook configured, notifications are logged locally");
                Self::disabled()
            }
        }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub async fn notify(&self, message: &str, severity: Severity) {
        if self.channels.is_empty() {
            log::info!("{} {}", severity.emoji(), message);
            return;
        }

        for (channel, result) in self.notify_and_wait(message, severity).await {
            match result {
                Ok(()) => log::debug!("Notification sent via {}", channel),
                Err(e) => log::warn!("⚠️ Failed to send {} notification: {}", channel, e),
            }
        }
    }

    /// Send to every channel in turn and report each result.
    pub async fn notify_and_wait(&self, message: &str, severity: Severity) -> Vec<(&'static str, Result<(), NotifyError>)> {
        let mut results = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            let result = AssertUnwindSafe(channel.send(message, severity))
                .catch_unwind()
                .await
                .unwrap_or(Err(NotifyError::Panicked));
            results.push((channel.name(), result));
        }

        results
    }
}
