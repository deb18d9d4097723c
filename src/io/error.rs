//! Error types and context management for search and solver operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all toolkit operations
#[derive(Debug)]
pub enum SearchError {
    /// Engine parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input lines could not be interpreted
    InvalidInput {
        /// Zero-based line number where the problem was found
        line: usize,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// A required marker character does not occur in the map
    MissingMarker {
        /// The marker that was searched for
        marker: char,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A parallel search worker panicked
    ///
    /// The remaining workers are released before this is reported, so the
    /// run never hangs on a dead worker.
    WorkerPanicked {
        /// Index of the worker that failed
        worker: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidInput { line, reason } => {
                write!(f, "Invalid input at line {}: {reason}", line + 1)
            }
            Self::MissingMarker { marker } => {
                write!(f, "Marker '{marker}' does not occur in the map")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::WorkerPanicked { worker } => {
                write!(f, "Search worker {worker} panicked")
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for toolkit results
pub type Result<T> = std::result::Result<T, SearchError>;

/// Attaches file system context to I/O failures
pub trait WithPath<T> {
    /// Record which path and operation produced the error
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`SearchError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SearchError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for SearchError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SearchError {
    SearchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error for a specific line
pub fn invalid_input(line: usize, reason: &impl ToString) -> SearchError {
    SearchError::InvalidInput {
        line,
        reason: reason.to_string(),
    }
}
