pub mod ai_config;
pub mod config;
pub mod notification_config;
pub mod pipeline_config;
pub mod remediation_config;
pub mod repository_config;
pub mod slack_config;
