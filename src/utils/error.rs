//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a detection report
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid report format: {0}")]
    InvalidFormat(String),

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),
}

/// Errors that can occur while assembling a control-flow graph
#[derive(Error, Debug)]
pub enum CfgError {
    #[error("Edge references unknown block: {0}")]
    UnknownBlock(String),

    #[error("Duplicate block: {0}")]
    DuplicateBlock(String),
}

/// Errors that can occur while building chart documents
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Negative address {address} in operation '{operation}'")]
    InvalidAddress { operation: String, address: i64 },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
