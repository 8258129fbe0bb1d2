pub mod config_helper;
pub mod prompt_generator;
pub mod repo_path;
