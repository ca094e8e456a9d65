//! Implementation of the `mario` program.

use drills_adapters::StreamConsole;
use drills_core::application::PyramidService;
use tracing::{debug, instrument};

use crate::{
    cli::MarioCli,
    config::{AppConfig, is_printable_marker},
    error::{CliError, CliResult},
};

#[instrument(skip_all)]
pub fn execute(cli: MarioCli, config: AppConfig) -> CliResult<()> {
    let marker = resolve_marker(cli.marker, &config)?;
    debug!(%marker, "marker resolved");

    let mut service = PyramidService::with_marker(Box::new(StreamConsole::stdio()), marker);
    service.run()?;
    Ok(())
}

/// `--marker` wins over configuration.
fn resolve_marker(flag: Option<char>, config: &AppConfig) -> CliResult<char> {
    match flag {
        Some(c) if is_printable_marker(c) => Ok(c),
        Some(c) => Err(CliError::InvalidInput {
            message: format!("--marker must be a printable character, got {c:?}"),
            source: None,
        }),
        None => config.marker(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config() {
        let mut config = AppConfig::default();
        config.pyramid.marker = "*".into();
        assert_eq!(resolve_marker(Some('@'), &config).unwrap(), '@');
    }

    #[test]
    fn config_used_without_flag() {
        let mut config = AppConfig::default();
        config.pyramid.marker = "*".into();
        assert_eq!(resolve_marker(None, &config).unwrap(), '*');
    }

    #[test]
    fn whitespace_flag_rejected() {
        let err = resolve_marker(Some(' '), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert_eq!(err.exit_code(), 2);
    }
}
