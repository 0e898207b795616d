//! # Padhide - Hide secrets in Base64 padding
//!
//! Padhide hides an arbitrary secret inside the padding characters produced
//! when Base64-encoding a carrier text, word by word.
//!
//! ## Overview
//!
//! When a word is Base64-encoded, the output may end in one or two `=`
//! padding characters. The standard encoder zero-fills the trailing bits of
//! the last real character before the padding; a decoder ignores them. That
//! leaves a covert channel:
//! - The carrier text is split on spaces and each word (plus a trailing
//!   space) is encoded independently.
//! - A token ending in one `=` can carry 2 secret bits, a token ending in
//!   `==` can carry 4; the bits ride as an alphabet offset on the last
//!   character before the padding.
//! - The secret is framed as a 16-bit length followed by one 7-bit code per
//!   character, then spread across the tokens in order.
//! - Decoding recovers both the carrier text and the secret; a token list
//!   with an all-zero secret is byte-identical to an innocent encoding.
//!
//! ## Example Usage
//!
//! ```rust
//! use padhide::{decode, encode};
//!
//! // An ordinary-looking carrier with enough padded words
//! let carrier = "the fox ran far off and hid two big red hens";
//!
//! let tokens = encode(carrier, "hi").unwrap();
//!
//! let decoded = decode(&tokens).unwrap();
//! assert_eq!(decoded.secret, "hi");
//! assert_eq!(decoded.carrier, carrier);
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: Per-token machinery (alphabet table, word tokens, padding slots)
//! - [`bitstream`]: Secret framing as a flat bit sequence
//! - [`encoder`]: Carrier engine, encode direction
//! - [`decoder`]: Carrier engine, decode direction

/// Number of bits in the secret length prefix.
pub const LENGTH_BITS: usize = 16;

/// Number of bits used to store one secret character.
pub const CHAR_BITS: usize = 7;

/// Maximum secret length in characters (bounded by the 16-bit prefix).
pub const MAX_SECRET_LEN: usize = u16::MAX as usize;

pub mod bitstream;
pub mod codec;
pub mod decoder;
pub mod encoder;

// Re-export commonly used types at the crate root
pub use bitstream::{frame, unframe, BitStream, FrameError};
pub use codec::{
    char_at, decode_token, encode_word, extract, index_of, padding_count, rewrite, BitGroup,
    CodecError,
};
pub use decoder::{decode, decode_with_config, DecodedMessage, DecoderConfig, DecoderError};
pub use encoder::{
    carrier_capacity, encode, encode_with_config, CapacityInfo, EncoderConfig, EncoderError,
};
