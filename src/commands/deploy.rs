use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::config::{DeployConfig, DeployOptions};
use crate::error::DeployError;
use crate::infrastructure::AntDeployTask;

pub async fn execute(options: DeployOptions, secret_dir: String) -> Result<i32> {
    println!();
    println!(
        "{}",
        "╔════════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .bold()
    );
    println!(
        "{}",
        "║  sfdeploy - Package Deploy                                 ║"
            .bright_cyan()
            .bold()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .bold()
    );
    println!();

    info!("🎯 Source root: {}", options.root);
    info!("🔢 API version: {}", options.api_version);
    info!(
        "⏱️  Polling: up to {} polls, {}ms apart",
        options.max_poll, options.poll_wait_millis
    );
    println!();

    // Resolve credentials once, up front; the record is passed into the
    // task invocation.
    let config = DeployConfig::load(Path::new(&secret_dir), options);

    match &config.credentials {
        Some(credentials) => info!("🔐 Credentials resolved for {}", credentials.server),
        // Absent credentials are not an error here; the Ant target rejects
        // the empty substitutions itself.
        None => debug!("No credentials resolved; deploying with empty substitutions"),
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Running Ant deploy...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let status = AntDeployTask::new(config)
        .run()
        .await
        .map_err(DeployError::from)?;

    spinner.finish_and_clear();
    println!();

    if status.success() {
        println!(
            "{}",
            "✅ Deploy complete".bright_green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Deploy task exited with {}", status).bright_red().bold()
        );
    }
    println!();

    // Exit code passthrough: the process exits with whatever the delegated
    // task returned. Killed-by-signal has no code; report failure generically.
    Ok(status.code().unwrap_or(1))
}
