//! `gororobas lift` command - turn plain text into a document
//!
//! Example usage:
//! - `gororobas lift description.txt > description.json`
//! - `echo "Plantei feijão hoje" | gororobas lift`

use tracing::debug;

use crate::cli::InputArgs;
use crate::commands::dispatch::read_text;
use gororobas_core::error::Result;
use gororobas_core::richtext::from_plain_text;

/// Execute the lift command
///
/// A single trailing newline (as written by editors and `echo`) is not a line
/// of its own. The document is JSON regardless of `--format`.
pub fn execute(input: &InputArgs) -> Result<()> {
    let text = read_text(input)?;
    let text = text.strip_suffix('\n').unwrap_or(&text);

    let doc = from_plain_text(text);
    debug!(paragraphs = doc.len(), "lift");

    super::print_json(&doc)
}
