//! Deploy task options.

use serde::{Deserialize, Serialize};

/// Options handed to the delegated Ant deploy target
///
/// Defaults mirror the values the deploy has always run with; each field can
/// be overridden from the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployOptions {
    /// Metadata API version (e.g., "32.0")
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Source root directory to deploy (e.g., "src/")
    #[serde(default = "default_root")]
    pub root: String,

    /// Maximum number of status polls before the task gives up
    #[serde(default = "default_max_poll")]
    pub max_poll: u32,

    /// Milliseconds between status polls
    #[serde(default = "default_poll_wait_millis")]
    pub poll_wait_millis: u64,

    /// Deploy into an already-existing package on the target
    #[serde(default = "default_existing_package")]
    pub existing_package: bool,
}

fn default_api_version() -> String {
    "32.0".to_string()
}

fn default_root() -> String {
    "src/".to_string()
}

fn default_max_poll() -> u32 {
    200
}

fn default_poll_wait_millis() -> u64 {
    10000
}

fn default_existing_package() -> bool {
    true
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            root: default_root(),
            max_poll: default_max_poll(),
            poll_wait_millis: default_poll_wait_millis(),
            existing_package: default_existing_package(),
        }
    }
}
