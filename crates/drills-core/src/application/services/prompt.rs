//! The read-validate-reprompt loop shared by both programs.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Console},
    domain::DomainError,
    error::DrillsResult,
};

/// Prompts until the console produces an acceptable value.
pub struct Prompter;

impl Prompter {
    /// Write `prompt`, read a line, and hand it to `parse`. Rejected lines
    /// are logged and the prompt is repeated, with no limit on attempts.
    ///
    /// Fails only when the console itself fails or the input ends.
    #[instrument(skip(console, parse))]
    pub fn request<T, F>(console: &mut dyn Console, prompt: &str, parse: F) -> DrillsResult<T>
    where
        F: Fn(&str) -> Result<T, DomainError>,
    {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            console.write(prompt)?;

            let Some(line) = console.read_line()? else {
                debug!(attempts = attempt, "input ended before a valid answer");
                return Err(ApplicationError::InputClosed {
                    prompt: prompt.to_owned(),
                }
                .into());
            };

            match parse(&line) {
                Ok(value) => {
                    debug!(attempt, "input accepted");
                    return Ok(value);
                }
                Err(e) => debug!(attempt, error = %e, "input rejected, asking again"),
            }
        }
    }
}
