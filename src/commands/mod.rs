//! CLI subcommands.
//!
//! One module per subcommand; each holds its parsed arguments and runs
//! through the `CommandExecutor` trait. The library core does no I/O, so
//! everything file- and console-shaped lives here.

mod capacity;
mod decode;
mod encode;

pub use capacity::CapacityCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;

use std::path::Path;

use anyhow::{Context, Result};

/// Runs a parsed subcommand.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Reads a carrier from a file or takes it inline, trimming a trailing
/// newline so the last word does not pick one up.
pub(crate) fn resolve_carrier(file: Option<&Path>, inline: Option<&str>) -> Result<String> {
    match (file, inline) {
        (Some(path), _) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read carrier from {}", path.display()))?;
            Ok(text.trim_end_matches(&['\r', '\n'][..]).to_string())
        }
        (None, Some(text)) => Ok(text.to_string()),
        (None, None) => anyhow::bail!("No carrier given"),
    }
}
