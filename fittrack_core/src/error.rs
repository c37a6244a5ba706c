//! Error types for the fittrack_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fittrack_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout code has no entry in the registry
    #[error("Unknown workout code: {0}")]
    UnknownWorkoutCode(String),

    /// Package parameters have the wrong arity or violate a range invariant
    #[error("Invalid parameters for {code}: {reason}")]
    InvalidParameters { code: String, reason: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Batch file in a format we can't read
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
}

impl Error {
    /// Shorthand for building an `InvalidParameters` error
    pub fn invalid(code: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParameters {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}
