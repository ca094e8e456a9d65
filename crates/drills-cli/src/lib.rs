//! # drills CLI
//!
//! Shared plumbing for the `cash` and `mario` binaries.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments (clap handles `--help` /
//!    `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Run the program body from [`commands`].
//! 5. Translate any [`CliError`](error::CliError) into a user-facing
//!    message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success                              |
//! |  1   | Internal / console I/O error         |
//! |  2   | Usage error, or input closed early   |
//! |  4   | Configuration error                  |

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
