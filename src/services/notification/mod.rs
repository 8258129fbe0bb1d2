pub mod notifier;
pub mod slack_channel;
