//! Error types for the mako CLI.

use std::{io, path::PathBuf, process::ExitCode, result::Result as StdResult};

use thiserror::Error;

/// Result type for mako operations.
pub type Result<T> = StdResult<T, Error>;

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// A glob pattern could not be compiled.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    BadPattern {
        /// Pattern supplied on the command line.
        pattern: String,
        /// Underlying pattern error.
        source: glob::PatternError,
    },
    /// A glob pattern matched nothing.
    #[error("No files matched pattern: {pattern}")]
    NoFilesMatched {
        /// Pattern supplied on the command line.
        pattern: String,
    },
    /// The batch found validation errors, or warnings in strict mode.
    #[error("Validation failed: {errors} error(s), {warnings} warning(s)")]
    ValidationFailed {
        /// Total error count across all files.
        errors: usize,
        /// Total warning count across all files.
        warnings: usize,
    },
    /// A file could not be read for inspection.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that could not be read.
        path: PathBuf,
    },
    /// A document could not be parsed.
    #[error("Parse error: {source}")]
    Parse {
        /// Underlying parse failure.
        source: mako_spec::ParseError,
    },
    /// The scaffold target already exists.
    #[error("File already exists: {path}")]
    FileExists {
        /// Path that already exists.
        path: PathBuf,
    },
    /// Parent directories could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirCreate {
        /// Directory that failed to create.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The scaffolded file could not be written.
    #[error("Failed to write {path}: {source}")]
    FileWrite {
        /// Path that failed to write.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A template could not be rendered.
    #[error("Failed to render template: {message}")]
    TemplateRender {
        /// Error message describing the render failure.
        message: String,
    },
    /// The JSON report could not be serialized.
    #[error("Failed to serialize JSON report: {source}")]
    JsonSerialize {
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

impl Error {
    /// Map errors to exit codes for CLI termination.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(1)
    }
}
