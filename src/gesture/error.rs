//! Gesture error types
//!
//! The state machine itself never fails; these cover the lifecycle,
//! configuration and trace loading around it.

use thiserror::Error;

/// Errors that can occur around gesture tracking
#[derive(Error, Debug)]
pub enum GestureError {
    #[error("Already listening")]
    AlreadyListening,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type for gesture operations
pub type GestureResult<T> = Result<T, GestureError>;
