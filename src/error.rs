//! Error types for vecmat operations.
//!
//! Every precondition is checked before any worker is scheduled, so a failed
//! call never leaves a partially computed result behind.

use std::fmt;

/// Errors that can occur while building matrices or multiplying by them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VecmatError {
    /// A caller-supplied argument violates a precondition.
    InvalidArgument {
        /// Human-readable error message.
        message: String,
    },
    /// The worker pool for a multiply call could not be started.
    ThreadPool {
        /// Number of workers that was requested.
        workers: usize,
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for VecmatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VecmatError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            VecmatError::ThreadPool { workers, message } => write!(
                f,
                "Failed to start worker pool: {} (requested {} workers)",
                message, workers
            ),
        }
    }
}

impl std::error::Error for VecmatError {}

/// Result type alias for vecmat operations.
pub type Result<T> = std::result::Result<T, VecmatError>;

/// Creates an invalid argument error.
pub fn invalid_argument(message: impl Into<String>) -> VecmatError {
    VecmatError::InvalidArgument {
        message: message.into(),
    }
}

/// Creates a worker pool error.
pub fn thread_pool_error(workers: usize, message: impl Into<String>) -> VecmatError {
    VecmatError::ThreadPool {
        workers,
        message: message.into(),
    }
}
