//! Host-specific error types
//!
//! Errors that can occur while loading or rendering hosts.

use thiserror::Error;

/// Errors that can occur during host operations
#[derive(Error, Debug)]
pub enum HostError {
    /// Host not found in the registry
    #[error("Host not found: {0}")]
    NotFound(String),

    /// Failed to load hosts file
    #[error("Failed to load hosts file: {0}")]
    LoadFailed(String),

    /// Invalid host definition
    #[error("Invalid host configuration: {0}")]
    InvalidConfig(String),

    /// Failed to write generated SSH config
    #[error("Failed to write SSH config: {0}")]
    WriteFailed(String),
}
