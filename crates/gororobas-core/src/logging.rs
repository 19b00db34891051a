//! Logging setup: `tracing` events on stderr, compact or as JSON lines
//!
//! `RUST_LOG`, then `GOROROBAS_LOG`, take precedence over the CLI flags.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{GororobasError, Result};

const ENV_OVERRIDES: [&str; 2] = ["RUST_LOG", "GOROROBAS_LOG"];
const LOG_TARGETS: [&str; 2] = ["gororobas", "gororobas_core"];

/// Logging flags as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
    /// Shorthand for `debug` when no explicit level is given
    pub verbose: bool,
    /// A bare level (`trace`) or a full directive (`gororobas_core=debug`)
    pub level: Option<String>,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl LogSettings {
    /// Filter directive implied by the flags alone
    pub fn directive(&self) -> String {
        match (self.level.as_deref(), self.verbose) {
            (Some(level), _) if level.contains('=') => level.to_string(),
            (Some(level), _) => targets_at(level),
            (None, true) => targets_at("debug"),
            (None, false) => targets_at("warn"),
        }
    }

    fn filter(&self) -> EnvFilter {
        ENV_OVERRIDES
            .iter()
            .find_map(|var| EnvFilter::try_from_env(var).ok())
            .unwrap_or_else(|| EnvFilter::new(self.directive()))
    }
}

fn targets_at(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(settings: &LogSettings) -> Result<()> {
    let registry = tracing_subscriber::registry().with(settings.filter());
    let layer = fmt::layer().with_writer(std::io::stderr).with_ansi(false);

    let installed = if settings.json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer.compact().with_target(false)).try_init()
    };

    installed.map_err(|e| GororobasError::Other(format!("failed to initialize logging: {e}")))
}
