//! Error types for the perk_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for perk_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A profile field is missing, non-numeric or non-positive.
    ///
    /// Fatal to a calculation: nothing is derived from a rejected profile.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The schedule generator failed or returned content we cannot use.
    ///
    /// Recovered by substituting the fallback schedule.
    #[error("Schedule generator unavailable: {0}")]
    UpstreamUnavailable(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn upstream(msg: impl Into<String>) -> Self {
        Error::UpstreamUnavailable(msg.into())
    }
}
