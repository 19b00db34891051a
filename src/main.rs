//! Gororobas - rich-text document tooling
//!
//! Command-line front end over `gororobas-core`: project documents to plain
//! text, lift scraped text into documents, and check or trim stored values.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use commands::dispatch::Outcome;
use gororobas_core::error::{ExitCode as Status, GororobasError};
use gororobas_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(&cli.log_settings()) {
        eprintln!("warning: {e}");
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(Outcome::Done) => exit_with(Status::Success),
        Ok(Outcome::NotRenderable) => exit_with(Status::Failure),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(status: Status) -> ExitCode {
    ExitCode::from(status as u8)
}

fn report(cli: &Cli, error: &GororobasError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if cli.quiet => {}
        OutputFormat::Human => eprintln!("error: {error}"),
    }
}

/// Help and version print as clap renders them. Any other parse failure is a
/// usage error; `Cli.format` is unknown at this point, so `--format json` is
/// looked up on argv to decide whether it goes out as a JSON envelope.
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !argv_requests_json() {
        err.exit();
    }

    let error = GororobasError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
