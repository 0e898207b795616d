//! Word tokens: one carrier word encoded as Base64.
//!
//! Every carrier word gets a trailing space appended before encoding, so the
//! word boundary survives the round trip. Decoding is padding-aware and must
//! tolerate nonzero trailing bits in the last real character (that is where
//! the secret rides), so the decode engine is configured to drop them the
//! same way the standard rule does for zero bits.

use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::{alphabet, DecodeError, Engine};

use super::error::CodecError;

/// Decode engine that accepts perturbed trailing bits instead of rejecting
/// the token as non-canonical.
const TOLERANT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encodes one carrier word into its Base64 token.
///
/// A single trailing space is appended first, so the token decodes back to
/// `word + " "` and concatenating token decodings reconstructs the carrier.
pub fn encode_word(word: &str) -> String {
    STANDARD.encode(format!("{word} "))
}

/// Decodes a token back to its byte group, padding-aware.
///
/// The token's actual character values are decoded, perturbation included;
/// bits beyond the byte boundary are dropped per the standard rule.
pub fn decode_token(token: &str) -> Result<Vec<u8>, CodecError> {
    TOLERANT.decode(token).map_err(|e| match e {
        DecodeError::InvalidByte(_, b) => CodecError::InvalidCharacter(b as char),
        _ => CodecError::MalformedToken(token.to_string()),
    })
}

/// Counts the trailing `=` padding characters of a token (0, 1, or 2 for
/// any well-formed token).
pub fn padding_count(token: &str) -> usize {
    token.bytes().rev().take_while(|&b| b == b'=').count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_word_appends_trailing_space() {
        // "a " -> 0x61 0x20 -> YSA=
        assert_eq!(encode_word("a"), "YSA=");
        // "abc " -> 4 bytes -> two padding characters
        assert_eq!(encode_word("abc"), "YWJjIA==");
        // "of " -> 3 bytes -> no padding
        assert_eq!(encode_word("of"), "b2Yg");
    }

    #[test]
    fn test_encode_word_empty_word() {
        // An empty word still carries its boundary space
        assert_eq!(encode_word(""), "IA==");
    }

    #[test]
    fn test_padding_count() {
        assert_eq!(padding_count("b2Yg"), 0);
        assert_eq!(padding_count("YSA="), 1);
        assert_eq!(padding_count("IA=="), 2);
    }

    #[test]
    fn test_decode_token_round_trip() {
        assert_eq!(decode_token("YSA=").unwrap(), b"a ");
        assert_eq!(decode_token("YWJjIA==").unwrap(), b"abc ");
        assert_eq!(decode_token("b2Yg").unwrap(), b"of ");
    }

    #[test]
    fn test_decode_token_tolerates_perturbed_trailing_bits() {
        // YSD= is YSA= with the last real character shifted by 3; the
        // trailing bits change but the decoded bytes do not
        assert_eq!(decode_token("YSD=").unwrap(), b"a ");
    }

    #[test]
    fn test_decode_token_invalid_character() {
        assert_eq!(
            decode_token("YS!="),
            Err(CodecError::InvalidCharacter('!'))
        );
    }

    #[test]
    fn test_decode_token_malformed() {
        // Truncated group without its padding
        assert!(matches!(
            decode_token("YSA"),
            Err(CodecError::MalformedToken(_))
        ));
    }

    #[test]
    fn test_decode_empty_token_is_empty_bytes() {
        assert_eq!(decode_token("").unwrap(), Vec::<u8>::new());
    }
}
