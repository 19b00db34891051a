//! CLI argument parsing for gororobas
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use gororobas_core::logging::LogSettings;

/// How commands print their results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for terminals and shell pipelines
    Human,
    /// Pretty JSON on stdout; errors become a JSON envelope on stderr
    Json,
}

/// Gororobas - rich-text document tooling for the agroecology encyclopedia
#[derive(Parser, Debug)]
#[command(name = "gororobas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_enum, ignore_case = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug" or "gororobas_core=trace")
    #[arg(long, global = true, env = "GOROROBAS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_settings(&self) -> LogSettings {
        LogSettings {
            verbose: self.verbose,
            level: self.log_level.clone(),
            json: self.log_json,
        }
    }
}

/// Where a command reads its input from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file; stdin when omitted or "-"
    pub path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the plain text of a document
    PlainText {
        #[command(flatten)]
        input: InputArgs,

        /// Fail on malformed documents instead of printing their JSON
        #[arg(long)]
        strict: bool,
    },

    /// Turn plain text into a document, one paragraph per line
    Lift {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Check whether a document has renderable content
    Check {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Keep only the first top-level blocks of a document
    Truncate {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of top-level blocks to keep
        #[arg(long)]
        max_nodes: usize,
    },

    /// Print a bounded plain-text preview of a document
    Preview {
        #[command(flatten)]
        input: InputArgs,

        /// Maximum number of top-level blocks (default from config)
        #[arg(long)]
        max_nodes: Option<usize>,

        /// Maximum number of characters (default from config)
        #[arg(long)]
        max_chars: Option<usize>,
    },

    /// List the people and vegetables a document mentions
    Mentions {
        #[command(flatten)]
        input: InputArgs,
    },
}
