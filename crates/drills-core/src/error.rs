//! Unified error handling for Drills Core.
//!
//! Wraps domain and application errors behind one root type so the binaries
//! only have to deal with [`DrillsError`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Drills Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DrillsError {
    /// Rejected input (not a number, or outside the accepted range).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration failures (closed input, console I/O).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DrillsError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in drills".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the prompt loop should ask again instead of giving up.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_retryable())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Cancelled,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type DrillsResult<T> = Result<T, DrillsError>;
