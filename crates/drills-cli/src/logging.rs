//! Tracing subscriber initialisation.
//!
//! Only the binaries call [`init_logging`]; `drills-core` and
//! `drills-adapters` only *emit* spans and events.  Everything goes to
//! stderr so stdout stays limited to prompts and results.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that get the derived level when `RUST_LOG` is unset.
const TARGETS: [&str; 5] = ["cash", "mario", "drills_cli", "drills_core", "drills_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(level)));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn level_verbose_one() {
        assert_eq!(derive_level(&args_with(1, false)), "info");
    }

    #[test]
    fn level_verbose_two() {
        assert_eq!(derive_level(&args_with(2, false)), "debug");
    }

    #[test]
    fn level_verbose_three_plus() {
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(10, false)), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_crate() {
        let directives = filter_directives("debug");
        assert!(directives.starts_with("cash=debug,mario=debug"));
        assert!(directives.contains("drills_core=debug"));
        assert!(directives.contains("drills_adapters=debug"));
    }
}
