//! Error types for glyphsmith-core

use thiserror::Error;

/// Result type alias for glyphsmith-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in glyphsmith-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },

    /// SVG input directory does not exist
    #[error("cannot find the svg files, check the input directory: {path}")]
    InputNotFound {
        /// Input directory that was expected
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
