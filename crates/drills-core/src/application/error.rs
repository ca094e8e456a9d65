//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rejected input.
//! Rejected input is a `DomainError` and never leaves the prompt loop.

use thiserror::Error;

use crate::application::services::{OWED_PROMPT, ROWS_PROMPT};
use crate::error::ErrorCategory;

/// Errors that occur while talking to the console.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The input stream ended before a valid value was read.
    #[error("Input closed while waiting for an answer to '{}'", .prompt.trim_end())]
    InputClosed { prompt: String },

    /// Reading from or writing to the console failed.
    #[error("Console error: {reason}")]
    Console { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InputClosed { prompt } => {
                let mut hints = vec!["Run the program interactively, or pipe a number into it".into()];
                if let Some(example) = piped_example(prompt) {
                    hints.push(format!("Example: {example}"));
                }
                hints
            }
            Self::Console { .. } => vec!["Check that stdin and stdout are still open".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputClosed { .. } => ErrorCategory::Cancelled,
            Self::Console { .. } => ErrorCategory::Io,
        }
    }
}

/// A shell line that answers `prompt`, for the programs this crate knows.
fn piped_example(prompt: &str) -> Option<&'static str> {
    match prompt {
        OWED_PROMPT => Some("echo 41 | cash"),
        ROWS_PROMPT => Some("echo 8 | mario"),
        _ => None,
    }
}
