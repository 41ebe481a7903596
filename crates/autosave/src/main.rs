//! Draft Auto-Save - Entry Point
//!
//! Binary entry point for the `autosave` operator CLI.

use autosave::cli::{Cli, CommandStatus, execute, load_config};
use autosave::infrastructure::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let mut stdout = std::io::stdout();
    match execute(&cli.command, &config, &mut stdout).await? {
        CommandStatus::Success => Ok(ExitCode::SUCCESS),
        CommandStatus::Missing => Ok(ExitCode::FAILURE),
    }
}
