//! Error types for the climatter_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for climatter_core operations
///
/// Only configuration-shaped problems surface through this type. Malformed
/// event lines and missing event files are recovered inside the loader.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date given on the command line or in config could not be parsed
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// Unknown list mode name
    #[error("Invalid list mode '{0}': expected one of nearest, furthest, all")]
    InvalidListMode(String),
}
