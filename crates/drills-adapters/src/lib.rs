//! Infrastructure adapters for the drills.
//!
//! This crate implements the ports defined in `drills-core::application::ports`.
//! It contains all the actual I/O.

pub mod console;

// Re-export commonly used adapters
pub use console::{MemoryConsole, StdioConsole, StreamConsole};
