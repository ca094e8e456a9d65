//! Application services - orchestrate the two programs.
//!
//! Both services follow the same shape: ask for a number through
//! [`Prompter`], run the domain computation, write the result.

pub mod change_service;
pub mod prompt;
pub mod pyramid_service;

pub use change_service::{ChangeService, OWED_PROMPT};
pub use prompt::Prompter;
pub use pyramid_service::{PyramidService, ROWS_PROMPT};
