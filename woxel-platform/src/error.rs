//! Error types for the platform bridge.
//!
//! Internal operations propagate `BridgeError` with `?`; the public media
//! bridge surface collapses every failure to an absent result at the
//! boundary, so engine-facing calls never fail.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for the platform bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Command '{tool}' failed with status {status}: {message}")]
    CommandFailed {
        tool: String,
        status: ExitStatus,
        message: String,
    },

    #[error("Failed to wait for command '{0}': {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("ffprobe parse error: {0}")]
    FfprobeParse(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Notification host error: {0}")]
    Notification(String),

    #[error("Required external dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for platform bridge operations
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;

/// Creates a `CommandStart` error for the named tool.
pub(crate) fn command_start_error(tool: &str, err: std::io::Error) -> BridgeError {
    BridgeError::CommandStart(tool.to_string(), err)
}

/// Creates a `CommandFailed` error for the named tool.
pub(crate) fn command_failed_error(
    tool: &str,
    status: ExitStatus,
    message: impl Into<String>,
) -> BridgeError {
    BridgeError::CommandFailed {
        tool: tool.to_string(),
        status,
        message: message.into(),
    }
}

/// Creates a `CommandWait` error for the named tool.
pub(crate) fn command_wait_error(tool: &str, err: std::io::Error) -> BridgeError {
    BridgeError::CommandWait(tool.to_string(), err)
}
