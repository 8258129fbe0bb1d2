use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "ai-remediator")]
#[clap(about = "AI-powered test failure remediation", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
