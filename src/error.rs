//! Error types for the knob demo
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the knob demo
#[derive(Debug, Error)]
pub enum KnobDemoError {
    /// Failed to decode an image asset from the catalog directory
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to decode image asset: {0}")]
    AssetDecodeFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Session script could not be read or was malformed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Session script error: {0}")]
    SessionError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for knob demo operations
pub type Result<T> = std::result::Result<T, KnobDemoError>;

/// Convert an error to a user-friendly message
///
/// Takes a `KnobDemoError` and returns a message suitable for showing to
/// someone running the demo, with hints for the common failure causes.
pub fn get_user_friendly_error(error: &KnobDemoError) -> String {
    match error {
        KnobDemoError::AssetDecodeFailed(_) => "An image asset could not be decoded.\n\n\
             Please ensure the asset directory contains valid PNG files.\n\
             The demo will continue with the affected slots empty."
            .to_string(),
        KnobDemoError::SessionError(_) => "The session script could not be loaded.\n\n\
             Check the file named by KNOBDEMO_SESSION, or unset the variable\n\
             to play the built-in session."
            .to_string(),
        KnobDemoError::ConfigError(_) => "Failed to prepare the demo configuration.\n\n\
             Check the KNOBDEMO_* environment variables and try again."
            .to_string(),
        KnobDemoError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and paths."
            )
        }
        KnobDemoError::JsonError(e) => {
            format!(
                "A JSON document could not be processed:\n\n{e}\n\n\
                 The session script may be malformed."
            )
        }
    }
}
