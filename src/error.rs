//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by record mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The new value failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No phone equal to the given value exists on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No email equal to the given value exists on the record
    #[error("Email not found: {0}")]
    EmailNotFound(String),
}

/// Errors that can occur while saving or loading the contact file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The file could not be opened, read, written or renamed
    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is not a contact book
    #[error("Corrupt contact file {}: {}", .path.display(), .reason)]
    Corrupt { path: PathBuf, reason: String },

    /// Serializing the records failed
    #[error("Failed to encode contacts: {0}")]
    Encode(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced while decoding or running a user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was recognised but its arguments were not
    #[error("{0}")]
    Usage(String),

    /// The first word is not a known command
    #[error("Unknown command '{0}'. Type 'help' for a list of available commands.")]
    UnknownCommand(String),

    /// The named contact is not in the store
    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
