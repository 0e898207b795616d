//! Carrier engine, encode direction.
//!
//! This module orchestrates the encoding process:
//! 1. Split the carrier text on single spaces
//! 2. Base64-encode every word with its boundary space
//! 3. Sum the padding capacity and frame the secret against it
//! 4. Rewrite each padded token with its bit-group, in order
//!
//! The capacity check happens before any token is rewritten, so a failing
//! encode produces no output at all.

use thiserror::Error;

use crate::bitstream::{self, FrameError};
use crate::codec::{self, BitGroup, CodecError};
use crate::{CHAR_BITS, LENGTH_BITS};

/// Errors that can occur during encoding.
#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Framing error: {0}")]
    Frame(#[from] FrameError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Configuration for the encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Whether to report capacity arithmetic and progress on stderr.
    pub verbose: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

/// How much secret a carrier text can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityInfo {
    /// Number of words the carrier splits into.
    pub words: usize,
    /// Total padding capacity in bits.
    pub capacity_bits: usize,
    /// Longest secret (in characters) that fits after the length prefix.
    pub max_secret_len: usize,
}

/// Computes the padding capacity of a carrier text.
pub fn carrier_capacity(text: &str) -> CapacityInfo {
    let words: Vec<&str> = text.split(' ').collect();
    let capacity_bits = words
        .iter()
        .map(|word| 2 * codec::padding_count(&codec::encode_word(word)))
        .sum::<usize>();

    CapacityInfo {
        words: words.len(),
        capacity_bits,
        max_secret_len: capacity_bits.saturating_sub(LENGTH_BITS) / CHAR_BITS,
    }
}

/// Encodes a secret into a carrier text, returning the token list.
///
/// # Arguments
/// * `text` - The carrier text, split on single spaces
/// * `secret` - The secret to hide, at most 65535 characters
///
/// # Returns
/// One Base64 token per carrier word, with the framed secret riding in the
/// padded tokens' last body characters.
pub fn encode(text: &str, secret: &str) -> Result<Vec<String>, EncoderError> {
    encode_with_config(text, secret, &EncoderConfig::default())
}

/// Encodes a secret with custom configuration.
pub fn encode_with_config(
    text: &str,
    secret: &str,
    config: &EncoderConfig,
) -> Result<Vec<String>, EncoderError> {
    let words: Vec<&str> = text.split(' ').collect();
    let tokens: Vec<String> = words.iter().map(|word| codec::encode_word(word)).collect();

    let capacity = tokens
        .iter()
        .map(|token| 2 * codec::padding_count(token))
        .sum::<usize>();

    if config.verbose {
        eprintln!("Carrier has {} words", words.len());
        eprintln!(
            "Maximum secret length: {} characters",
            capacity.saturating_sub(LENGTH_BITS) / CHAR_BITS
        );
        eprintln!("Secret length: {} characters", secret.chars().count());
    }

    // Fails before any token is touched; no partial output on error
    let mut stream = bitstream::frame(secret, capacity)?;

    if config.verbose {
        eprintln!("Secret fits, rewriting padded tokens");
    }

    let mut encoded = Vec::with_capacity(tokens.len());
    for token in tokens {
        let pads = codec::padding_count(&token);
        if pads > 0 {
            let width = 2 * pads;
            let value = stream
                .read_value(width)
                .expect("framed stream covers the full carrier capacity")
                as u8;
            encoded.push(codec::rewrite(&token, BitGroup { value, width })?);
        } else {
            encoded.push(token);
        }
    }

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Ten words, each encoding to a two-padding token: 40 bits of capacity
    const CARRIER: &str = "the fox ran far off and hid two big red";

    #[test]
    fn test_capacity_info() {
        let info = carrier_capacity(CARRIER);
        assert_eq!(info.words, 10);
        assert_eq!(info.capacity_bits, 40);
        assert_eq!(info.max_secret_len, 3);
    }

    #[test]
    fn test_capacity_of_unpadded_carrier() {
        // "of " is 3 bytes, no padding
        let info = carrier_capacity("of of of");
        assert_eq!(info.capacity_bits, 0);
        assert_eq!(info.max_secret_len, 0);
    }

    #[test]
    fn test_encode_empty_secret_leaves_tokens_untouched() {
        let tokens = encode(CARRIER, "").unwrap();
        let plain: Vec<String> = CARRIER.split(' ').map(codec::encode_word).collect();
        assert_eq!(tokens, plain);
    }

    #[test]
    fn test_encode_passes_unpadded_tokens_through() {
        // "of" has no padding and must survive unchanged even with a secret
        let text = "the fox ran far of and hid two big red dog";
        let tokens = encode(text, "a").unwrap();
        assert!(tokens.contains(&"b2Yg".to_string()));
    }

    #[test]
    fn test_encode_capacity_boundary() {
        // 40 bits hold 16 + 7*3 = 37; three characters fit, four do not
        assert!(encode(CARRIER, "abc").is_ok());
        let result = encode(CARRIER, "abcd");
        assert!(matches!(
            result,
            Err(EncoderError::Frame(FrameError::CapacityExceeded {
                required: 44,
                available: 40,
            }))
        ));
    }

    #[test]
    fn test_encode_secret_too_long() {
        let secret = "x".repeat(crate::MAX_SECRET_LEN + 1);
        assert!(matches!(
            encode(CARRIER, &secret),
            Err(EncoderError::Frame(FrameError::SecretTooLong { .. }))
        ));
    }

    #[test]
    fn test_encode_token_count_matches_words() {
        let tokens = encode(CARRIER, "ab").unwrap();
        assert_eq!(tokens.len(), 10);
    }

    #[test]
    fn test_encode_is_deterministic() {
        assert_eq!(encode(CARRIER, "abc").unwrap(), encode(CARRIER, "abc").unwrap());
    }
}
