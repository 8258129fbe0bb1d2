pub mod ai;
pub mod applied_patch;
pub mod cli;
pub mod command_output;
pub mod committer_identity;
pub mod config;
pub mod notification;
pub mod patch_spec;
pub mod publish_receipt;
pub mod push_target;
