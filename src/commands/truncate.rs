//! `gororobas truncate` command - keep the first top-level blocks of a document

use tracing::debug;

use crate::cli::InputArgs;
use crate::commands::dispatch::read_document;
use gororobas_core::error::Result;
use gororobas_core::richtext::truncate_content;

/// Execute the truncate command; the document is JSON regardless of `--format`
pub fn execute(input: &InputArgs, max_nodes: usize) -> Result<()> {
    let doc = read_document(input)?;
    let truncated = truncate_content(&doc, max_nodes);
    debug!(before = doc.len(), after = truncated.len(), "truncate");

    super::print_json(&truncated)
}
