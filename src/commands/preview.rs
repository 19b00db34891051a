//! `gororobas preview` command - bounded plain-text preview of a document
//!
//! Bounds come from `[preview]` in the config file unless given as flags.

use tracing::debug;

use crate::cli::{Cli, InputArgs, OutputFormat};
use crate::commands::dispatch::read_document;
use gororobas_core::config::Config;
use gororobas_core::error::{GororobasError, Result};
use gororobas_core::richtext::{preview, PreviewOptions};

/// Execute the preview command
pub fn execute(
    cli: &Cli,
    config: &Config,
    input: &InputArgs,
    max_nodes: Option<usize>,
    max_chars: Option<usize>,
) -> Result<()> {
    if max_chars == Some(0) {
        return Err(GororobasError::invalid_value("--max-chars", 0));
    }

    let options = PreviewOptions {
        max_nodes: max_nodes.unwrap_or(config.preview.max_nodes),
        max_chars: max_chars.unwrap_or(config.preview.max_chars),
    };

    let doc = read_document(input)?;
    let text = preview(&doc, &options, &config.plain_text);
    debug!(?options, chars = text.chars().count(), "preview");

    match cli.format {
        OutputFormat::Human => println!("{}", text),
        OutputFormat::Json => super::print_json(&serde_json::json!({
            "text": text,
            "max_nodes": options.max_nodes,
            "max_chars": options.max_chars,
        }))?,
    }

    Ok(())
}
