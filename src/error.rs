//! Centralized error types for sfdeploy
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// Top-level error type for sfdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Deploy task error: {0}")]
    Task(#[from] TaskError),
}

/// Secret/configuration file errors
///
/// These never propagate out of credential resolution; the resolver matches on
/// them to decide whether to fall back to environment variables.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read config file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },
}

/// Delegated deploy task errors
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Deploy tool not found: {tool}. Set ANT_BIN env var or install Apache Ant on PATH")]
    ToolNotFound { tool: String },

    #[error("Failed to launch deploy task: {message}")]
    LaunchFailed { message: String },
}
