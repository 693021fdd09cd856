use clap::Parser;
use std::process;

mod commands;
mod config;

use commands::*;
use config::*;
use multipay_cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    // Load configuration
    let config = match load_config(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {:#}", e);
            process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Status => status_command(&config, cli.format).await,
        Commands::Burnrate => burnrate_command(&config, cli.format).await,
        Commands::Runway { balance } => runway_command(&config, balance, cli.format).await,
        Commands::Preview { employee, now } => {
            preview_command(&config, &employee, now, cli.format).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
