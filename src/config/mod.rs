//! # Deployment Configuration System
//!
//! Two layers, assembled once at startup:
//!
//! 1. **Credentials**: resolved from `secret.json` or environment variables
//!    (`credentials` module).
//! 2. **Deploy options**: API version, source root, polling limits; CLI
//!    flags override the defaults (`deploy` module).
//!
//! The assembled [`DeployConfig`] is passed by value into the task
//! invocation; nothing here lives in ambient global state.

mod credentials;
mod deploy;

pub use credentials::{Credentials, SECRET_FILE};
pub use deploy::DeployOptions;

use std::path::Path;

/// Complete deployment configuration
///
/// `credentials` is `None` when neither source yields a record; the delegated
/// task receives empty substitutions in that case and is expected to reject
/// them itself.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Deploy task options
    pub options: DeployOptions,

    /// Resolved credentials, if any source produced them
    pub credentials: Option<Credentials>,
}

impl DeployConfig {
    /// Assemble the configuration, resolving credentials from `secret_dir`
    pub fn load(secret_dir: &Path, options: DeployOptions) -> Self {
        Self {
            options,
            credentials: Credentials::resolve(secret_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_with_secret_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(SECRET_FILE),
            r#"{"dev": {"username": "alice", "password": "p@ss", "server": "https://example.com"}}"#,
        )
        .unwrap();

        let config = DeployConfig::load(dir.path(), DeployOptions::default());
        assert_eq!(config.credentials.unwrap().username, "alice");
        assert_eq!(config.options.api_version, "32.0");
    }
}
