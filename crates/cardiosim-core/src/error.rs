//! Error types for cardiosim-rs.

use thiserror::Error;

/// The main error type for cardiosim-rs operations.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// A device kind with the given id is already registered.
    #[error("device kind '{0}' already registered")]
    DeviceExists(String),

    /// A device kind with the given id was not found.
    #[error("device kind '{0}' not found")]
    DeviceNotFound(String),

    /// A profile function read a parameter the caller did not supply.
    #[error("parameter '{0}' not supplied")]
    MissingParameter(String),

    /// A sizing preset with the given model name was not found.
    #[error("preset '{0}' not found")]
    PresetNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for cardiosim-rs operations.
pub type Result<T> = std::result::Result<T, DeviceError>;
