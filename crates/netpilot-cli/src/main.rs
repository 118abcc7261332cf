//! Netpilot CLI
//!
//! Turn high-level network intents into device configuration reports.

use anyhow::Result;
use clap::Parser;
use netpilot_core::error::exit_codes;
use netpilot_core::{Config, NetpilotError};

mod app;
mod commands;
mod output;
mod progress;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let code = match run(cli).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => report_error(&e),
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    if let Commands::Config(args) = cli.command {
        return commands::config::run(args, cli.format).await;
    }

    let config = Config::load()?;

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args, &config, cli.format).await,
        Commands::Retrieve(args) => commands::retrieve::run(args, &config, cli.format).await,
        Commands::Kb => commands::kb::run(&config, cli.format).await,
        Commands::Prompt(args) => commands::prompt::run(args, &config).await,
        Commands::Config(args) => commands::config::run(args, cli.format).await,
    }
}

fn report_error(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<NetpilotError>() {
        Some(NetpilotError::InvalidInput(message)) => {
            eprintln!("Warning: {}", message);
            exit_codes::INVALID_INPUT
        }
        Some(err) => {
            eprintln!("Error: {}", err);
            err.exit_code()
        }
        None => {
            eprintln!("Error: {:#}", e);
            exit_codes::GENERAL_ERROR
        }
    }
}
