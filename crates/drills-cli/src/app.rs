//! Startup and shutdown shared by both binaries.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

/// How a fatal error is rendered on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStyle {
    pub verbose: bool,
    pub no_color: bool,
}

impl ReportStyle {
    pub fn new(global: &GlobalArgs, config: Option<&AppConfig>) -> Self {
        Self {
            verbose: global.verbose > 0,
            no_color: global.no_color || config.is_some_and(|c| c.output.no_color),
        }
    }
}

/// Parse arguments, printing help/version/usage errors the way clap would.
pub fn parse_args<P: Parser>() -> Result<P, ExitCode> {
    P::try_parse().map_err(|e| {
        let _ = e.print();
        if e.use_stderr() {
            ExitCode::from(2)
        } else {
            ExitCode::SUCCESS
        }
    })
}

/// Initialise logging and load configuration.
pub fn bootstrap(global: &GlobalArgs) -> Result<AppConfig, ExitCode> {
    if let Err(e) = init_logging(global) {
        eprintln!("Failed to initialise logging: {e}");
        return Err(ExitCode::from(1));
    }

    debug!(
        verbose = global.verbose,
        quiet = global.quiet,
        no_color = global.no_color,
        "CLI started"
    );

    AppConfig::load(global.config.as_deref())
        .map_err(|e| report(e, ReportStyle::new(global, None)))
}

/// Turn the program's result into an exit code.
pub fn finish(program: &str, result: CliResult<()>, style: ReportStyle) -> ExitCode {
    match result {
        Ok(()) => {
            info!("{program} completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report(e, style),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// Colour is disabled when stderr is not a TTY (same logic as logging.rs).
pub fn report(err: CliError, style: ReportStyle) -> ExitCode {
    err.log();

    let msg = if !style.no_color && std::io::stderr().is_terminal() {
        err.format_colored(style.verbose)
    } else {
        err.format_plain(style.verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
