//! CLI definitions for sfdeploy
//!
//! This module contains all CLI argument parsing structures using clap.

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sfdeploy",
    version,
    about = "Credential-resolving deployment CLI for Salesforce metadata packages",
    long_about = "Resolves deployment credentials from secret.json or environment variables\nand hands them to the Ant metadata deploy target."
)]
pub struct Cli {
    /// Running with no subcommand is equivalent to `sfdeploy deploy`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy the package to the target server (the default command)
    Deploy {
        /// Metadata API version passed to the deploy task
        #[arg(long, default_value = "32.0")]
        api_version: String,

        /// Source root directory to deploy
        #[arg(long, default_value = "src/")]
        root: String,

        /// Maximum number of status polls before the task gives up
        #[arg(long, default_value = "200")]
        max_poll: u32,

        /// Milliseconds between status polls
        #[arg(long, default_value = "10000")]
        poll_wait_millis: u64,

        /// Deploy into an already-existing package on the target
        #[arg(long, default_value = "true", action = ArgAction::Set)]
        existing_package: bool,

        /// Directory containing secret.json
        #[arg(long, default_value = ".")]
        secret_dir: String,
    },
}
