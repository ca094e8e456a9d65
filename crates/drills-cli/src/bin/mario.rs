//! `mario`: prompt for a height and print a right-aligned pyramid.

use std::process::ExitCode;

use drills_cli::{
    app::{self, ReportStyle},
    cli::MarioCli,
    commands,
};

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    let cli = match app::parse_args::<MarioCli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let config = match app::bootstrap(&cli.global) {
        Ok(cfg) => cfg,
        Err(code) => return code,
    };

    let style = ReportStyle::new(&cli.global, Some(&config));
    app::finish("mario", commands::mario::execute(cli, config), style)
}
