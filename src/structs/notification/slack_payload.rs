use serde::Serialize;
use crate::enums::severity::Severity;

/// Slack incoming-webhook payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackPayload {
    pub text: String,
    pub attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackAttachment {
    pub color: String,
    pub fields: Vec<SlackField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl SlackPayload {
    pub fn for_message(message: &str, severity: Severity) -> Self {
        Self {
            text: format!("{} *{}*", severity.emoji(), message),
            attachments: vec![SlackAttachment {
                color: severity.color().to_string(),
                fields: vec![SlackField {
                    title: "Status".to_string(),
                    value: severity.status().to_string(),
                    short: true,
                }],
            }],
        }
    }
}
