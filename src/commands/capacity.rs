//! Capacity command - report how much secret a carrier can hold.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use padhide::carrier_capacity;

use super::CommandExecutor;

/// Show how much secret a carrier text can hold.
///
/// Capacity is twice the number of `=` padding characters across the
/// carrier's encoded words; the usable secret length subtracts the 16-bit
/// length prefix and divides by 7 bits per character.
#[derive(Args, Debug)]
pub struct CapacityCommand {
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
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self) -> Result<()> {
        let carrier = super::resolve_carrier(self.carrier.as_deref(), self.carrier_text.as_deref())?;
        let info = carrier_capacity(&carrier);

        println!("Words: {}", info.words);
        println!("Capacity: {} bits", info.capacity_bits);
        println!("Maximum secret length: {} characters", info.max_secret_len);

        Ok(())
    }
}
