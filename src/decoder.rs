//! Carrier engine, decode direction.
//!
//! This module orchestrates the decoding process:
//! 1. Decode every token back to its byte group
//! 2. Collect the bit-group of every padded token, in order
//! 3. Unframe the collected bits into the secret
//! 4. Reassemble the carrier text from the concatenated decodings
//!
//! Decoding is fallible: a token with a foreign character or a broken
//! Base64 structure surfaces an error immediately. A token without any
//! padding is fine, it simply carries no secret bits.

use thiserror::Error;

use crate::bitstream::{self, BitStream};
use crate::codec::{self, CodecError};

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Configuration for the decoder.
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Whether to report progress on stderr.
    pub verbose: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// Result of decoding a token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    /// The recovered secret.
    pub secret: String,
    /// The reconstructed carrier text.
    pub carrier: String,
}

/// Decodes a token list, recovering both the secret and the carrier text.
pub fn decode(tokens: &[String]) -> Result<DecodedMessage, DecoderError> {
    decode_with_config(tokens, &DecoderConfig::default())
}

/// Decodes a token list with custom configuration.
pub fn decode_with_config(
    tokens: &[String],
    config: &DecoderConfig,
) -> Result<DecodedMessage, DecoderError> {
    let mut stream = BitStream::new();
    let mut carrier_bytes = Vec::new();

    for token in tokens {
        carrier_bytes.extend_from_slice(&codec::decode_token(token)?);

        if codec::padding_count(token) > 0 {
            let group = codec::extract(token)?;
            stream.push_value(u32::from(group.value), group.width);
        }
    }

    if config.verbose {
        eprintln!(
            "Collected {} secret bits from {} tokens",
            stream.len(),
            tokens.len()
        );
    }

    let secret = bitstream::unframe(stream);

    let mut carrier = String::from_utf8_lossy(&carrier_bytes).into_owned();
    // Every word contributed one boundary space; the final one is not part
    // of the carrier text
    if carrier.ends_with(' ') {
        carrier.pop();
    }

    Ok(DecodedMessage { secret, carrier })
}
