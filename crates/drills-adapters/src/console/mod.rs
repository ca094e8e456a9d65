//! Console adapters.

mod memory;
mod stream;

pub use memory::MemoryConsole;
pub use stream::{StdioConsole, StreamConsole};
