//! `gororobas plain-text` command - print the plain text of a document
//!
//! A value that is not a document prints as its own JSON, so previews built
//! from stored values never fail; `--strict` turns that case into an error.
//!
//! Example usage:
//! - `gororobas plain-text note.json`
//! - `psql -tAc "select body from notes where id = 1" | gororobas plain-text --strict`

use tracing::debug;

use crate::cli::{Cli, InputArgs, OutputFormat};
use crate::commands::dispatch::read_value;
use gororobas_core::config::Config;
use gororobas_core::error::Result;
use gororobas_core::richtext::project_value_with;

/// Execute the plain-text command
pub fn execute(cli: &Cli, config: &Config, input: &InputArgs, strict: bool) -> Result<()> {
    let value = read_value(input)?;
    let projection = project_value_with(&value, &config.plain_text);
    let fallback = projection.is_fallback();
    debug!(fallback, "project_value");

    let text = if strict {
        projection.strict()?
    } else {
        projection.into_string()
    };

    match cli.format {
        OutputFormat::Human => println!("{}", text),
        OutputFormat::Json => super::print_json(&serde_json::json!({
            "text": text,
            "fallback": fallback,
        }))?,
    }

    Ok(())
}
