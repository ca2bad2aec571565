//! Error handling for the sensor logger
//!
//! This module defines the crate error type and a Result alias for use
//! throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sensor logger operations
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Failure while appending buffered readings to the target file
    #[error("Storage error writing {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LoggerError>,
    },
}

impl LoggerError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LoggerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Wrap an IO error raised while writing `path`
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::Storage {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for sensor logger operations
pub type Result<T> = std::result::Result<T, LoggerError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
