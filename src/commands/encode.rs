//! Encode command - hide a secret in a carrier text.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use padhide::{encode_with_config, EncoderConfig};

use super::CommandExecutor;

/// Encode a secret into a carrier text.
///
/// The carrier is split on spaces and every word is Base64-encoded with a
/// trailing space; the secret rides in the padding channel. Output is one
/// token per line. The carrier must offer enough padding capacity:
/// 16 + 7 bits per secret character (check with `padhide capacity`).
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Carrier text file
    #[arg(
        short = 'p',
        long,
        conflicts_with = "carrier_text",
        required_unless_present = "carrier_text"
    )]
    pub carrier: Option<PathBuf>,

    /// Carrier text given inline
    #[arg(short = 'P', long)]
    pub carrier_text: Option<String>,

    /// Secret file (mutually exclusive with --secret-text)
    #[arg(short = 's', long, conflicts_with = "secret_text")]
    pub secret: Option<PathBuf>,

    /// Secret given inline (reads from stdin when neither is given)
    #[arg(short = 'S', long)]
    pub secret_text: Option<String>,

    /// File to write the token list to (stdout if not given)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output (capacity arithmetic and progress)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let carrier = super::resolve_carrier(self.carrier.as_deref(), self.carrier_text.as_deref())?;
        let secret = self.resolve_secret()?;

        let config = EncoderConfig {
            verbose: self.verbose,
        };

        let tokens = encode_with_config(&carrier, &secret, &config)
            .context("Failed to encode secret into carrier")?;

        let mut listing = tokens.join("\n");
        listing.push('\n');

        match &self.output {
            Some(path) => {
                std::fs::write(path, &listing)
                    .with_context(|| format!("Failed to write tokens to {}", path.display()))?;
                if self.verbose {
                    eprintln!("Wrote {} tokens to {}", tokens.len(), path.display());
                }
            }
            None => print!("{listing}"),
        }

        Ok(())
    }
}

impl EncodeCommand {
    /// Resolves the secret from a file, the command line, or stdin.
    fn resolve_secret(&self) -> Result<String> {
        if let Some(path) = &self.secret {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read secret from {}", path.display()))?;
            return Ok(text.trim_end_matches(&['\r', '\n'][..]).to_string());
        }

        if let Some(text) = &self.secret_text {
            return Ok(text.clone());
        }

        eprintln!("Reading secret from stdin (Ctrl+D to finish):");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read secret from stdin")?;
        Ok(buffer.trim().to_string())
    }
}
