//! Input handling shared by every command: a path argument or stdin

use std::fs;
use std::io::{self, IsTerminal, Read};

use serde_json::Value;
use tracing::debug;

use crate::cli::InputArgs;
use gororobas_core::error::{GororobasError, Result};
use gororobas_core::richtext::Document;

/// Read the raw input text
pub fn read_text(input: &InputArgs) -> Result<String> {
    match input.path.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            let content = fs::read_to_string(path)
                .map_err(|e| GororobasError::io_operation("read", path.display(), e))?;
            debug!(path = %path.display(), bytes = content.len(), "read_file");
            Ok(content)
        }
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(GororobasError::UsageError(
                    "no input: pass a PATH or pipe content on stdin".to_string(),
                ));
            }

            let mut content = String::new();
            stdin.lock().read_to_string(&mut content)?;
            debug!(bytes = content.len(), "read_stdin");
            Ok(content)
        }
    }
}

/// Read the input as an arbitrary JSON value
pub fn read_value(input: &InputArgs) -> Result<Value> {
    let content = read_text(input)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read the input as a validated document
pub fn read_document(input: &InputArgs) -> Result<Document> {
    Document::from_json_str(&read_text(input)?)
}
