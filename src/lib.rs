//! Automated test-failure remediation.
//!
//! A run reads a failing test log, asks an OpenAI-compatible model for a
//! single-line fix, applies it to the working tree, commits and pushes it
//! with `git`, and reports the outcome to a Slack-compatible webhook.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
