//! Implementation of the `cash` program.

use drills_adapters::StreamConsole;
use drills_core::application::ChangeService;
use tracing::instrument;

use crate::{cli::CashCli, config::AppConfig, error::CliResult};

#[instrument(skip_all)]
pub fn execute(_cli: CashCli, _config: AppConfig) -> CliResult<()> {
    let mut service = ChangeService::new(Box::new(StreamConsole::stdio()));
    service.run()?;
    Ok(())
}
