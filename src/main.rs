//! `make2graph` binary.
//!
//! Diagnostics go to stderr so stdout carries nothing but the rendered graph.

use make2graph::{cli::Cli, runner};
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::ERROR };
    fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    if let Err(err) = runner::run(&cli) {
        runner::report(&err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
