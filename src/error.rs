//! Error types for the tagger front end
//!
//! Tagging itself never fails; these cover the host side: locating and
//! reading files, configuration, and output encoding.

use std::process::ExitCode;

use thiserror::Error;

/// Errors surfaced by the `ktags` front end
#[derive(Debug, Error)]
pub enum KtagsError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Invalid kind selection '{selection}': {message}")]
    InvalidKinds { selection: String, message: String },

    #[error("Configuration error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Serialization failed: {message}")]
    Serialization { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KtagsError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(2),
            Self::UnsupportedLanguage { .. } => ExitCode::from(3),
            Self::InvalidKinds { .. } | Self::Config { .. } => ExitCode::from(4),
            Self::Serialization { .. } | Self::Io(_) => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, KtagsError>;
