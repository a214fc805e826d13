//! Runtime tool path resolution
//!
//! The delegated deploy runs through an external binary (Apache Ant). For each
//! tool we check an environment variable (e.g. `ANT_BIN`) and fall back to a
//! PATH-based invocation if the envvar is not set. CI images can pin an exact
//! binary via the envvar; developer machines just need the tool on PATH.

use std::env;

/// Environment variable that overrides the Ant binary path
pub const ANT_BIN_VAR: &str = "ANT_BIN";

/// Default Ant command name (PATH lookup)
pub const ANT: &str = "ant";

/// Get a tool binary path from environment or fallback to PATH
///
/// # Arguments
///
/// * `env_var` - Environment variable name to check first
/// * `fallback` - Command name to use if env var not set
pub fn get_tool_path(env_var: &str, fallback: &str) -> String {
    env::var(env_var).unwrap_or_else(|_| fallback.to_string())
}
