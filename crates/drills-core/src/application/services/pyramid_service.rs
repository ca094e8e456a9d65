//! Pyramid Service - the `mario` program flow.

use tracing::{info, instrument, trace};

use crate::{
    application::{Prompter, ports::Console},
    domain::{DEFAULT_MARKER, Pyramid, RowCount, parse_rows},
    error::DrillsResult,
};

pub const ROWS_PROMPT: &str = "How many rows? ";

pub struct PyramidService {
    console: Box<dyn Console>,
    marker: char,
}

impl PyramidService {
    /// Service drawing with the default `#` marker.
    pub fn new(console: Box<dyn Console>) -> Self {
        Self::with_marker(console, DEFAULT_MARKER)
    }

    pub fn with_marker(console: Box<dyn Console>, marker: char) -> Self {
        Self { console, marker }
    }

    /// Prompt until a row count of at least one is entered.
    pub fn request_rows(&mut self) -> DrillsResult<RowCount> {
        Prompter::request(self.console.as_mut(), ROWS_PROMPT, parse_rows)
    }

    /// Run the whole program once. Lines are written as they are rendered.
    #[instrument(skip_all, fields(marker = %self.marker))]
    pub fn run(&mut self) -> DrillsResult<RowCount> {
        let rows = self.request_rows()?;
        info!(rows = rows.get(), "rendering pyramid");

        let pyramid = Pyramid::new(rows, self.marker);
        for (index, mut line) in pyramid.lines().enumerate() {
            trace!(index, "row");
            line.push('\n');
            self.console.write(&line)?;
        }

        Ok(rows)
    }
}
