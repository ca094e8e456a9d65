//! `cash`: prompt for an amount owed and print the fewest coins that pay it.

use std::process::ExitCode;

use drills_cli::{
    app::{self, ReportStyle},
    cli::CashCli,
    commands,
};

fn main() -> ExitCode {
    // Silently ignored if .env doesn't exist.
    let _ = dotenvy::dotenv();

    let cli = match app::parse_args::<CashCli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let config = match app::bootstrap(&cli.global) {
        Ok(cfg) => cfg,
        Err(code) => return code,
    };

    let style = ReportStyle::new(&cli.global, Some(&config));
    app::finish("cash", commands::cash::execute(cli, config), style)
}
