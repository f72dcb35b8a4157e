//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Malformed thread headers are not errors: the parser drops those blocks.

use thiserror::Error;

/// Errors that can occur while loading and analyzing a dump
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),
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
