//! Infrastructure layer - external I/O adapters
//!
//! This module contains the code that interacts with external systems:
//! - The Ant metadata deploy target (package upload/poll against the server)

pub mod ant;

// Re-export commonly used types
pub use ant::AntDeployTask;
