//! Console adapter over any reader/writer pair, stdin/stdout in production.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use drills_core::{
    application::{ApplicationError, ports::Console},
    error::{DrillsError, DrillsResult},
};
use tracing::trace;

/// The console the binaries use.
pub type StdioConsole = StreamConsole<StdinLock<'static>, Stdout>;

/// Line-oriented console over a buffered reader and a writer.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl StreamConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn write(&mut self, text: &str) -> DrillsResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| map_io_error(e, "write to console"))
    }

    fn read_line(&mut self) -> DrillsResult<Option<String>> {
        // Bytes rather than `read_line` so invalid UTF-8 reaches the parser
        // (and gets rejected there) instead of failing the read.
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| map_io_error(e, "read from console"))?;

        if read == 0 {
            trace!("console input exhausted");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

fn map_io_error(e: io::Error, operation: &str) -> DrillsError {
    ApplicationError::Console {
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
