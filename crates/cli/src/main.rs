// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use findit::cli::Cli;
use findit::error::{Error, ExitCode};

mod cmd_find;

/// Environment variable that overrides the log filter.
const LOG_ENV: &str = "FINDIT_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "findit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_find::run(&cli) {
        Ok(code) => code.into(),
        Err(err) => match err.downcast_ref::<Error>() {
            Some(e) if e.is_broken_pipe() => ExitCode::Success.into(),
            Some(e) => {
                eprintln!("error: {:#}", err);
                if e.exit_code() == ExitCode::Usage {
                    eprintln!("\nFor more information, try '--help'.");
                }
                e.exit_code().into()
            }
            None => {
                eprintln!("error: {:#}", err);
                ExitCode::Error.into()
            }
        },
    }
}
