pub mod ai_provider_error;
pub mod commands;
pub mod pipeline_stage;
pub mod pipeline_state;
pub mod publish_step;
pub mod run_outcome;
pub mod severity;
