//! Error types for help database conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while segmenting a decoded help source into topics.
///
/// Any of these aborts the whole conversion before a single file is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A directive line whose name is not part of the closed directive set.
    #[error("line {line}: unknown directive '.{directive}'")]
    MalformedDirective { directive: String, line: usize },

    /// A `.context` line without an identifier.
    #[error("line {line}: '.context' requires an identifier")]
    MissingContext { line: usize },
}

/// Errors raised by the end-to-end conversion (parse, render, write).
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
