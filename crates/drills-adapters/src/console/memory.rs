//! In-memory console adapter for testing.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use drills_core::{
    application::{ApplicationError, ports::Console},
    error::DrillsResult,
};

/// Scripted console: input lines are queued up front, output is captured.
///
/// Clones share state, so a test can hand one clone to a service and read
/// the output back through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    inner: Arc<Mutex<MemoryConsoleInner>>,
}

#[derive(Debug, Default)]
struct MemoryConsoleInner {
    input: VecDeque<String>,
    output: String,
}

impl MemoryConsole {
    /// Create a console with no pending input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console that will answer with `lines`, in order. A newline
    /// is appended to each, as a terminal would.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let console = Self::new();
        for line in lines {
            console.push_line(line);
        }
        console
    }

    /// Queue one more input line.
    pub fn push_line(&self, line: impl Into<String>) {
        let mut line = line.into();
        line.push('\n');
        self.inner.lock().unwrap().input.push_back(line);
    }

    /// Everything written so far.
    pub fn output(&self) -> String {
        self.inner.lock().unwrap().output.clone()
    }

    /// Input lines not consumed yet.
    pub fn remaining_input(&self) -> usize {
        self.inner.lock().unwrap().input.len()
    }
}

impl Console for MemoryConsole {
    fn write(&mut self, text: &str) -> DrillsResult<()> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::Console {
            reason: "memory console lock poisoned".into(),
        })?;
        inner.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> DrillsResult<Option<String>> {
        let mut inner = self.inner.lock().map_err(|_| ApplicationError::Console {
            reason: "memory console lock poisoned".into(),
        })?;
        Ok(inner.input.pop_front())
    }
}
