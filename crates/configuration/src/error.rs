//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

/// The errors that can be thrown when parsing the configuration directory.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {file_path}:{line}:{column}: {message}")]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported configuration version {version} in {file_path}, expected 1")]
    UnsupportedVersion { file_path: PathBuf, version: u32 },
    #[error("empty connection URI in {file_path}")]
    EmptyConnectionUri { file_path: PathBuf },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // Sometimes we need to convert errors from other modules to strings.
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when turning the parsed configuration into
/// the runtime one.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid connection URI in {file_path}: {message}")]
    MissingEnvironmentVariable { file_path: PathBuf, message: String },
}

/// The errors that can be thrown when writing the configuration directory.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
