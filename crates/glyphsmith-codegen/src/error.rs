//! Error types for code generation

use thiserror::Error;

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum Error {
    /// Discovery or configuration failure from glyphsmith-core
    #[error(transparent)]
    Core(#[from] glyphsmith_core::Error),

    /// Failed to read an asset
    #[error("failed to read asset {path}: {source}")]
    ReadAsset {
        /// Asset path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Asset is not well-formed SVG markup
    #[error("invalid SVG in {path}: {message}")]
    InvalidSvg {
        /// Asset path
        path: String,
        /// Parser error description
        message: String,
    },

    /// Transform rejected an asset for another reason
    #[error("transform failed for {path}: {message}")]
    TransformError {
        /// Asset path
        path: String,
        /// Error description
        message: String,
    },

    /// Template rendering failed
    #[error("invalid template: {0}")]
    InvalidTemplate(#[from] minijinja::Error),

    /// Metadata serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Output directory could not be reset
    #[error("failed to reset output directory {path}: {message}")]
    Reset {
        /// Output directory
        path: String,
        /// Error description
        message: String,
    },

    /// No relative import path leads from the index to the output directory
    #[error("cannot import {to} from {from}")]
    ImportPath {
        /// Directory of the index manifest
        from: String,
        /// Output directory
        to: String,
    },

    /// Failed to write a generated file
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the run failed because the SVG input directory is missing
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Error::Core(glyphsmith_core::Error::InputNotFound { .. }))
    }
}
