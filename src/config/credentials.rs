//! Deployment credential resolution.
//!
//! Credentials come from one of two sources, in priority order:
//!
//! 1. A `secret.json` file in the working directory, holding an
//!    environment-keyed map of credential records; the `dev` record is used.
//! 2. The `username`, `password` and `server` process environment variables,
//!    all-or-nothing (the fallback for CI agents without a local secret file).
//!
//! A missing or malformed secret file is an expected condition, not an error:
//! it is swallowed here and resolution falls through to the environment. The
//! only externally observable outcome is presence vs. absence of the record.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// File name probed in the secret directory
pub const SECRET_FILE: &str = "secret.json";

/// Credentials for the deployment target
///
/// Constructed once at startup and passed by value into the task invocation.
/// Field values from the secret file are taken as-is; a record whose `dev`
/// entry omits a field deserializes with that field empty rather than
/// triggering the environment fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Base URL of the deployment target server
    #[serde(default)]
    pub server: String,
}

/// On-disk shape of `secret.json`
///
/// Only the `dev` record is read; extra keys are ignored.
#[derive(Debug, Deserialize)]
struct SecretFile {
    dev: Credentials,
}

impl Credentials {
    /// Resolve credentials from `secret.json` in `dir`, falling back to the
    /// `username`/`password`/`server` environment variables.
    ///
    /// Returns `None` when neither source yields a complete record. Never
    /// errors: secret-file failures are recovered locally.
    pub fn resolve(dir: &Path) -> Option<Self> {
        match read_secret_file(&dir.join(SECRET_FILE)) {
            Ok(credentials) => {
                debug!("Loaded credentials from {}", SECRET_FILE);
                Some(credentials)
            }
            Err(e) => {
                // No usable secret.json, use env vars
                debug!("No credentials from {}: {}", SECRET_FILE, e);
                Self::from_env()
            }
        }
    }

    /// Build credentials from environment variables
    ///
    /// All three of `username`, `password` and `server` must be set and
    /// non-empty; partial presence yields `None`, never a partial record.
    fn from_env() -> Option<Self> {
        let username = non_empty_var("username")?;
        let password = non_empty_var("password")?;
        let server = non_empty_var("server")?;

        debug!("Loaded credentials from environment variables");
        Some(Self {
            username,
            password,
            server,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read and parse the secret file, extracting the `dev` record.
///
/// Explicit fallible step matched by [`Credentials::resolve`]; a missing file,
/// unreadable file, unparsable JSON and a missing `dev` key all collapse into
/// a [`ConfigError`] that the caller treats as one unified failure.
fn read_secret_file(path: &Path) -> Result<Credentials, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let secret: SecretFile =
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;

    Ok(secret.dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_secret(dir: &Path, content: &str) {
        fs::write(dir.join(SECRET_FILE), content).unwrap();
    }

    #[test]
    fn test_resolve_from_secret_file() {
        let dir = tempdir().unwrap();
        write_secret(
            dir.path(),
            r#"{"dev": {"username": "alice", "password": "p@ss", "server": "https://example.com"}}"#,
        );

        let creds = Credentials::resolve(dir.path()).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "p@ss");
        assert_eq!(creds.server, "https://example.com");
    }

    #[test]
    fn test_resolve_ignores_extra_environments() {
        let dir = tempdir().unwrap();
        write_secret(
            dir.path(),
            r#"{
                "dev": {"username": "dev-user", "password": "x", "server": "https://dev.example.com"},
                "prod": {"username": "prod-user", "password": "y", "server": "https://example.com"}
            }"#,
        );

        let creds = Credentials::resolve(dir.path()).unwrap();
        assert_eq!(creds.username, "dev-user");
    }

    #[test]
    fn test_incomplete_dev_record_is_accepted_as_is() {
        // A parseable file wins even when fields are missing; the absent
        // fields come back empty instead of triggering the env fallback.
        let dir = tempdir().unwrap();
        write_secret(
            dir.path(),
            r#"{"dev": {"username": "alice", "server": "https://example.com"}}"#,
        );

        let creds = Credentials::resolve(dir.path()).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "");
        assert_eq!(creds.server, "https://example.com");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let dir = tempdir().unwrap();
        write_secret(
            dir.path(),
            r#"{"dev": {"username": "alice", "password": "p@ss", "server": "https://example.com"}}"#,
        );

        assert_eq!(
            Credentials::resolve(dir.path()),
            Credentials::resolve(dir.path())
        );
    }

    // The environment is process-global and tests run in parallel, so every
    // assertion that depends on env-var state lives in this one test.
    #[test]
    fn test_env_fallback_behaviour() {
        let empty = tempdir().unwrap();
        let malformed = tempdir().unwrap();
        write_secret(malformed.path(), "{ not json");

        // All three set: env fallback produces the record, for a missing
        // file and for a malformed one alike.
        env::set_var("username", "alice");
        env::set_var("password", "p@ss");
        env::set_var("server", "https://example.com");

        let expected = Credentials {
            username: "alice".to_string(),
            password: "p@ss".to_string(),
            server: "https://example.com".to_string(),
        };
        assert_eq!(Credentials::resolve(empty.path()), Some(expected.clone()));
        assert_eq!(
            Credentials::resolve(malformed.path()),
            Some(expected.clone())
        );

        // A valid secret file still wins over the environment.
        let with_file = tempdir().unwrap();
        write_secret(
            with_file.path(),
            r#"{"dev": {"username": "file-user", "password": "x", "server": "https://file.example.com"}}"#,
        );
        assert_eq!(
            Credentials::resolve(with_file.path()).unwrap().username,
            "file-user"
        );

        // Partial presence is total absence: no partial record.
        env::remove_var("server");
        assert_eq!(Credentials::resolve(empty.path()), None);

        // Empty values count as unset.
        env::set_var("server", "");
        assert_eq!(Credentials::resolve(empty.path()), None);

        // Neither source yields a record.
        env::remove_var("username");
        env::remove_var("password");
        env::remove_var("server");
        assert_eq!(Credentials::resolve(empty.path()), None);
    }
}
