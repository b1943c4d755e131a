//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a curve file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read curve file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: invalid number '{token}': {source}")]
    InvalidNumber {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Errors that can occur while analyzing a directory of curve files
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("No result files found in {0}")]
    NoResultFiles(PathBuf),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
