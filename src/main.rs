use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod infrastructure;
mod tools;

use cli::{Cli, Commands};
use config::DeployOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false) // Disable ANSI escape codes for cleaner output
        .init();

    // Execute command; no subcommand runs the deploy with its defaults
    let exit_code = match cli.command {
        Some(Commands::Deploy {
            api_version,
            root,
            max_poll,
            poll_wait_millis,
            existing_package,
            secret_dir,
        }) => {
            let options = DeployOptions {
                api_version,
                root,
                max_poll,
                poll_wait_millis,
                existing_package,
            };
            commands::deploy::execute(options, secret_dir).await?
        }
        None => commands::deploy::execute(DeployOptions::default(), ".".to_string()).await?,
    };

    // The process exits with whatever the delegated task returned
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
