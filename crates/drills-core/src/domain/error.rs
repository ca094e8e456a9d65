use thiserror::Error;

/// Rejected console input.
///
/// Every variant is recoverable: the prompt loop logs it and asks again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("'{input}' is not a whole number")]
    NotAnInteger { input: String },

    #[error("{value} is below the minimum of {minimum}")]
    OutOfRange { value: i64, minimum: i64 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotAnInteger { .. } => vec!["Enter digits only, e.g. 41".into()],
            Self::OutOfRange { minimum, .. } => {
                vec![format!("Enter a number no smaller than {minimum}")]
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        true
    }
}
