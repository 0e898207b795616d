//! Decode command - recover the secret (and carrier) from a token list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use padhide::{decode_with_config, DecoderConfig};

use super::CommandExecutor;

/// Decode a token list, recovering the hidden secret.
///
/// Reads one Base64 token per line, in file order. The secret goes to
/// stdout (or --output); the reconstructed carrier text is available with
/// --show-carrier.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// File containing the encoded token list, one token per line
    #[arg(short, long)]
    pub input: PathBuf,

    /// File to write the secret to (stdout if not given)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the reconstructed carrier text (on stderr)
    #[arg(long)]
    pub show_carrier: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let raw = std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read token list from {}", self.input.display()))?;
        let tokens: Vec<String> = raw.lines().map(str::to_string).collect();

        if self.verbose {
            eprintln!("Read {} tokens from {}", tokens.len(), self.input.display());
        }

        let config = DecoderConfig {
            verbose: self.verbose,
        };

        let decoded =
            decode_with_config(&tokens, &config).context("Failed to decode token list")?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &decoded.secret)
                    .with_context(|| format!("Failed to write secret to {}", path.display()))?;
                eprintln!(
                    "Wrote {} secret characters to {}",
                    decoded.secret.chars().count(),
                    path.display()
                );
            }
            None => println!("{}", decoded.secret),
        }

        if self.show_carrier {
            eprintln!();
            eprintln!("Carrier text:");
            eprintln!("{}", decoded.carrier);
        }

        Ok(())
    }
}
