use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init {
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(short, long)]
        force: bool,
    },
    /// Analyze a test-failure log, apply the suggested fix, commit, push and notify
    Run {
        #[clap(short, long)]
        log: Option<PathBuf>,
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(long)]
        no_strict: bool,
    },
    /// Load the configuration and report every problem found
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
