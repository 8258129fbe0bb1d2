use std::time::Duration;
use async_trait::async_trait;
use crate::enums::severity::Severity;
use crate::errors::notify_error::NotifyError;
use crate::structs::notification::slack_payload::SlackPayload;
use crate::traits::notify_channel::NotifyChannel;

/// Slack-compatible incoming webhook.
pub struct SlackChannel {
    webhook_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl SlackChannel {
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotifyChannel for SlackChannel {
    fn name(&self) -> &'static str {
        "slack"
    }

    async fn send(&self, message: &str, severity: Severity) -> Result<(), NotifyError> {
        let payload = SlackPayload::for_message(message, severity);

        log::debug!("Posting {:?} notification to Slack", severity);

        let response = self
            .client
            .post(&self.webhook_url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotifyError::Timeout(self.timeout)
                } else {
                    NotifyError::Http(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
