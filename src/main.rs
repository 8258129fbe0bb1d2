use std::process::ExitCode;
use clap::Parser;
use ai_remediator::config::constants::CONFIG_ERROR_EXIT_CODE;
use ai_remediator::structs::cli::Cli;
use ai_remediator::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    match runner.run_command(cli.command).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("❌ {:#}", e);
            ExitCode::from(CONFIG_ERROR_EXIT_CODE)
        }
    }
}
