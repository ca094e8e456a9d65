//! Application ports (traits) for external dependencies.
//!
//! The services never touch stdin or stdout directly. They go through
//! [`Console`], which `drills-adapters` implements.

use crate::error::DrillsResult;

/// Port for line-oriented console I/O.
///
/// Implemented by:
/// - `drills_adapters::console::StreamConsole` (stdin/stdout, or any reader/writer)
/// - `drills_adapters::console::MemoryConsole` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Write `text` as-is and flush, so a prompt without a trailing newline
    /// is visible before the next read blocks.
    fn write(&mut self, text: &str) -> DrillsResult<()>;

    /// Read one line, terminator included. `None` once the input has ended.
    fn read_line(&mut self) -> DrillsResult<Option<String>>;
}
