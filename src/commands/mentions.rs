//! `gororobas mentions` command - list the entities a document mentions
//!
//! Human output is one `kind<TAB>id<TAB>label` line per distinct entity.

use tracing::debug;

use crate::cli::{Cli, InputArgs, OutputFormat};
use crate::commands::dispatch::read_document;
use gororobas_core::error::Result;
use gororobas_core::richtext::distinct_mentions;

/// Execute the mentions command
pub fn execute(cli: &Cli, input: &InputArgs) -> Result<()> {
    let doc = read_document(input)?;
    let distinct = distinct_mentions(&doc);
    debug!(count = distinct.len(), "mentions");

    match cli.format {
        OutputFormat::Human => {
            for mention in &distinct {
                println!("{}\t{}\t{}", mention.kind, mention.id, mention.label);
            }
        }
        OutputFormat::Json => super::print_json(&distinct)?,
    }

    Ok(())
}
