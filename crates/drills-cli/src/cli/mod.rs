//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text and defaults.  No business logic lives here.  Both programs work
//! with no arguments at all; every flag is optional.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── cash ──────────────────────────────────────────────────────────────────────

/// `cash`: fewest coins for an amount owed.
#[derive(Debug, Parser)]
#[command(
    name     = "cash",
    bin_name = "cash",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Count the fewest coins that pay an amount owed",
    long_about = "Prompts for an amount in cents and prints the smallest number \
                  of 25, 10, 5 and 1 cent coins that add up to it.",
    after_help = "EXAMPLES:\n\
        \x20 cash\n\
        \x20 echo 41 | cash\n\
        \x20 echo 99 | cash -vv",
)]
pub struct CashCli {
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── mario ─────────────────────────────────────────────────────────────────────

/// `mario`: right-aligned pyramid.
#[derive(Debug, Parser)]
#[command(
    name     = "mario",
    bin_name = "mario",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Print a right-aligned pyramid",
    long_about = "Prompts for a row count and prints a right-aligned pyramid \
                  of that height.",
    after_help = "EXAMPLES:\n\
        \x20 mario\n\
        \x20 echo 8 | mario\n\
        \x20 echo 4 | mario --marker '*'",
)]
pub struct MarioCli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Character used to draw the pyramid. Overrides `pyramid.marker`.
    #[arg(short = 'm', long = "marker", value_name = "CHAR")]
    pub marker: Option<char>,
}
