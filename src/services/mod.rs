pub mod ai_providers;
pub mod failure_analyzer;
pub mod git_client;
pub mod notification;
pub mod patch_applier;
pub mod patch_parser;
pub mod publisher;
pub mod remediation_pipeline;
