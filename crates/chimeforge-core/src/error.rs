//! Error types for the chime synthesis core.

use thiserror::Error;

/// Result type for chime rendering operations.
pub type ChimeResult<T> = Result<T, ChimeError>;

/// Errors that can occur while rendering a chime.
#[derive(Debug, Error)]
pub enum ChimeError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate} Hz")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid target peak level.
    #[error("invalid target level: {db} dBFS")]
    InvalidTargetLevel {
        /// The invalid level in dBFS.
        db: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error while writing container bytes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChimeError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
