//! Ant deploy task invocation
//!
//! Wraps the external Ant-based metadata deploy. The upload/poll protocol
//! lives entirely in the Ant target; this adapter only turns a
//! [`DeployConfig`] into the standard `-Dsf.*` properties, launches the
//! process and surfaces its exit status.

use std::process::ExitStatus;

use tokio::process::Command;
use tracing::{debug, info};

use crate::config::{Credentials, DeployConfig};
use crate::error::TaskError;
use crate::tools::{get_tool_path, ANT, ANT_BIN_VAR};

/// Ant target invoked for the deploy
const DEPLOY_TARGET: &str = "deploy";

/// Client for the delegated Ant deploy task
pub struct AntDeployTask {
    config: DeployConfig,
}

impl AntDeployTask {
    /// Create a task invocation from an assembled configuration
    pub fn new(config: DeployConfig) -> Self {
        Self { config }
    }

    /// Build the `-Dsf.*` property arguments for the Ant target
    ///
    /// Absent credentials substitute as empty strings; the Ant target rejects
    /// those itself, no validation happens here.
    pub fn property_args(&self) -> Vec<String> {
        let credentials = self
            .config
            .credentials
            .clone()
            .unwrap_or_else(Credentials::default);
        let options = &self.config.options;

        vec![
            format!("-Dsf.username={}", credentials.username),
            format!("-Dsf.password={}", credentials.password),
            format!("-Dsf.serverurl={}", credentials.server),
            format!("-Dsf.apiVersion={}", options.api_version),
            format!("-Dsf.deployRoot={}", options.root),
            format!("-Dsf.maxPoll={}", options.max_poll),
            format!("-Dsf.pollWaitMillis={}", options.poll_wait_millis),
            format!("-Dsf.existingPackage={}", options.existing_package),
        ]
    }

    /// Launch the Ant deploy target and wait for it to finish
    ///
    /// Stdio is inherited so the task's own progress output reaches the
    /// terminal. Returns the task's exit status; a missing binary or spawn
    /// failure is a typed error.
    pub async fn run(&self) -> Result<ExitStatus, TaskError> {
        let ant = get_tool_path(ANT_BIN_VAR, ANT);

        which::which(&ant).map_err(|_| TaskError::ToolNotFound { tool: ant.clone() })?;

        debug!("Invoking {} {} with {:?}", ant, DEPLOY_TARGET, self.redacted_args());
        info!("📦 Deploying {} (API {})", self.config.options.root, self.config.options.api_version);

        Command::new(&ant)
            .arg(DEPLOY_TARGET)
            .args(self.property_args())
            .status()
            .await
            .map_err(|e| TaskError::LaunchFailed {
                message: e.to_string(),
            })
    }

    /// Property args with the password value masked, for debug logging
    fn redacted_args(&self) -> Vec<String> {
        self.property_args()
            .into_iter()
            .map(|arg| {
                if arg.starts_with("-Dsf.password=") {
                    "-Dsf.password=***".to_string()
                } else {
                    arg
                }
            })
            .collect()
    }
}
