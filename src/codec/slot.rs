//! Padding slots: the per-token secret channel.
//!
//! A token with n padding characters carries 2n secret bits. The bits ride
//! as an alphabet offset on the last character before the first `=`: the
//! base character of a padded token always has zeroed trailing bits, so an
//! offset bounded by the padding width lands entirely in bits the standard
//! decode rule ignores. Rewriting never touches the padding characters
//! themselves and never changes what the token decodes to.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::alphabet::{char_at, index_of};
use super::error::CodecError;
use super::token::{decode_token, padding_count};

/// A fixed-width slice of the framed secret stream, assigned to one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitGroup {
    /// Numeric value of the bits (0..=3 for one padding character, 0..=15
    /// for two).
    pub value: u8,
    /// Width in bits, always twice the token's padding count.
    pub width: usize,
}

/// Rewrites the last body character of `token` by the bit-group's value.
///
/// `group.width` must equal `2 * padding_count(token)`; the caller slices
/// the framed stream accordingly. Fails with `MalformedToken` if the token
/// has no padding boundary to anchor on.
pub fn rewrite(token: &str, group: BitGroup) -> Result<String, CodecError> {
    let first_equal = token
        .find('=')
        .ok_or_else(|| CodecError::MalformedToken(token.to_string()))?;
    if first_equal == 0 {
        return Err(CodecError::MalformedToken(token.to_string()));
    }

    let p = first_equal - 1;
    let carrier_char = token.as_bytes()[p] as char;
    let shifted = char_at(index_of(carrier_char)? as isize + group.value as isize);

    let mut rewritten = String::with_capacity(token.len());
    rewritten.push_str(&token[..p]);
    rewritten.push(shifted);
    rewritten.push_str(&token[first_equal..]);
    Ok(rewritten)
}

/// Recovers the bit-group carried by a padded token.
///
/// The unperturbed character at the slot position is re-derived by
/// re-encoding the token's decoded bytes; the group value is the alphabet
/// distance from that base character to the actual one, modulo 64.
pub fn extract(token: &str) -> Result<BitGroup, CodecError> {
    let pads = padding_count(token);
    let first_equal = token
        .find('=')
        .ok_or_else(|| CodecError::MalformedToken(token.to_string()))?;
    if first_equal == 0 {
        return Err(CodecError::MalformedToken(token.to_string()));
    }

    let p = first_equal - 1;
    let actual = token.as_bytes()[p] as char;

    let base = STANDARD.encode(decode_token(token)?);
    let base_char = base.as_bytes()[p] as char;

    let delta =
        (index_of(actual)? as isize - index_of(base_char)? as isize).rem_euclid(64);

    Ok(BitGroup {
        value: delta as u8,
        width: 2 * pads,
    })
}
