//! CLI commands for gororobas

pub mod check;
pub mod dispatch;
pub mod lift;
pub mod mentions;
pub mod plain_text;
pub mod preview;
pub mod truncate;

use serde::Serialize;

use gororobas_core::error::Result;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
