pub mod ai_provider;
pub mod notify_channel;
pub mod version_control;
