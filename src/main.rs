//! Padhide - hide secrets in Base64 padding.
//!
//! A CLI tool that encodes a carrier text word by word into Base64 tokens
//! and hides a secret in their padding channel, then recovers both sides
//! from a token list.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CapacityCommand, CommandExecutor, DecodeCommand, EncodeCommand};

/// Padhide - hide secrets in Base64 padding
///
/// Each carrier word is Base64-encoded independently; tokens ending in `=`
/// carry 2 secret bits, tokens ending in `==` carry 4. The token list looks
/// like an ordinary encoding.
#[derive(Parser)]
#[command(name = "padhide")]
#[command(version)]
#[command(about = "Hides and recovers secrets in the Base64 padding channel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a secret into a carrier text
    Encode(EncodeCommand),
    /// Decode a token list, recovering the secret
    Decode(DecodeCommand),
    /// Show how much secret a carrier can hold
    Capacity(CapacityCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Capacity(cmd) => cmd.execute(),
    }
}
