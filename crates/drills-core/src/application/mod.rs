//! Application layer for the drills.
//!
//! This layer contains:
//! - **Services**: the prompt loop and the two program flows
//! - **Ports**: the [`Console`] trait the services talk through
//! - **Errors**: orchestration failures (closed input, console I/O)
//!
//! The computations themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ChangeService, Prompter, PyramidService};

pub use ports::Console;

pub use error::ApplicationError;
