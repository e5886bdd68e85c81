//! Error handling for map generation
//!
//! This module provides a unified error type and result type for the
//! catalog compilation pipeline.

use std::fmt;

/// Map generation error type
#[derive(Debug, Clone)]
pub enum GenError {
    /// A reverse-catalog key maps to two different values
    ConfigurationConflict {
        key: String,
        existing: String,
        incoming: String,
    },
    /// External source missing, unreadable, or yielded no pattern matches
    ImportFailure { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::ConfigurationConflict {
                key,
                existing,
                incoming,
            } => {
                write!(
                    f,
                    "Configuration conflict: reverse key '{}' maps to both '{}' and '{}'",
                    key, existing, incoming
                )
            }
            GenError::ImportFailure { message } => {
                write!(f, "Import failure: {}", message)
            }
            GenError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for GenError {}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        GenError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for map generation operations
pub type GenResult<T> = Result<T, GenError>;

// Convenience constructors for errors
impl GenError {
    pub fn conflict(
        key: impl Into<String>,
        existing: impl Into<String>,
        incoming: impl Into<String>,
    ) -> Self {
        GenError::ConfigurationConflict {
            key: key.into(),
            existing: existing.into(),
            incoming: incoming.into(),
        }
    }

    pub fn import(message: impl Into<String>) -> Self {
        GenError::ImportFailure {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        GenError::IoError {
            message: message.into(),
        }
    }

    /// Import failures are the only condition compilation survives
    pub fn is_fatal(&self) -> bool {
        !matches!(self, GenError::ImportFailure { .. })
    }
}
