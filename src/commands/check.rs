//! `gororobas check` command - report whether a document has renderable content
//!
//! Exits 0 when the document is renderable and 1 otherwise, so it can gate
//! shell pipelines: `gororobas check -q bio.json && publish bio.json`.
//! A value that is not a document at all is simply not renderable.

use tracing::debug;

use crate::cli::{Cli, InputArgs, OutputFormat};
use crate::commands::dispatch::{read_value, Outcome};
use gororobas_core::error::Result;
use gororobas_core::richtext::renderable;

/// Execute the check command
pub fn execute(cli: &Cli, input: &InputArgs) -> Result<Outcome> {
    let value = read_value(input)?;
    let doc = renderable(&value);
    debug!(renderable = doc.is_some(), "check");

    match cli.format {
        OutputFormat::Human if cli.quiet => {}
        OutputFormat::Human => match &doc {
            Some(doc) => println!("renderable ({} blocks)", doc.len()),
            None => println!("not renderable"),
        },
        OutputFormat::Json => super::print_json(&serde_json::json!({
            "renderable": doc.is_some(),
            "blocks": doc.as_ref().map(|d| d.len()),
        }))?,
    }

    Ok(match doc {
        Some(_) => Outcome::Done,
        None => Outcome::NotRenderable,
    })
}
