use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("failed to write configuration file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("configuration file already exists at '{}' (use --force to overwrite)", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("environment variable {var} is not set (needed for {field})")]
    MissingEnv { var: String, field: &'static str },

    #[error("could not determine the home directory for the default configuration path")]
    NoHomeDir,

    #[error("invalid configuration:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),
}
