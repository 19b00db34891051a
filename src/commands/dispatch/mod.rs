//! Command dispatch logic for gororobas

mod io;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use gororobas_core::config::Config;
use gororobas_core::error::Result;

pub use io::{read_document, read_text, read_value};

/// How a command that ran to completion wants the process to exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// `check` found nothing to display; the verdict is already printed
    NotRenderable,
}

pub fn run(cli: &Cli, start: Instant) -> Result<Outcome> {
    let config = load_config(cli)?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let result = match &cli.command {
        Commands::Check { input } => commands::check::execute(cli, input),

        Commands::PlainText { input, strict } => {
            commands::plain_text::execute(cli, &config, input, *strict).map(|()| Outcome::Done)
        }

        Commands::Lift { input } => commands::lift::execute(input).map(|()| Outcome::Done),

        Commands::Truncate { input, max_nodes } => {
            commands::truncate::execute(input, *max_nodes).map(|()| Outcome::Done)
        }

        Commands::Preview {
            input,
            max_nodes,
            max_chars,
        } => commands::preview::execute(cli, &config, input, *max_nodes, *max_chars)
            .map(|()| Outcome::Done),

        Commands::Mentions { input } => {
            commands::mentions::execute(cli, input).map(|()| Outcome::Done)
        }
    };

    debug!(elapsed = ?start.elapsed(), outcome = ?result.as_ref().ok(), "execute_command");
    result
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
