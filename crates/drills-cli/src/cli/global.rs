//! Arguments shared by both binaries.
//!
//! Declared here and flattened into each binary's parser so that `-v`,
//! `-q`, etc. behave the same in `cash` and `mario`.

use clap::Args;
use std::path::PathBuf;

/// Global arguments for both programs.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity (logs go to stderr):
    (none)  - Only warnings and errors
    -v      - Info level (results)
    -vv     - Debug level (rejected input, coin breakdown)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error logging.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). `NO_COLOR=1` counts as set; an empty
    /// value, `0` or `false` does not.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored diagnostics"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}
