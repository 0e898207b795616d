//! Per-token codecs for the padding channel.
//!
//! This module provides:
//! - The fixed 64-symbol alphabet with modular-offset lookups
//! - Word/token encoding and decoding on top of the standard Base64 rule
//! - The padding-slot rewrite that carries secret bits on one character

pub mod alphabet;
mod error;
pub mod slot;
pub mod token;

pub use alphabet::{char_at, index_of, ALPHABET};
pub use error::CodecError;
pub use slot::{extract, rewrite, BitGroup};
pub use token::{decode_token, encode_word, padding_count};
