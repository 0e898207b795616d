//! Secret framing as a flat bit sequence.
//!
//! The framed layout is a 16-bit big-endian length, one 7-bit code per
//! secret character, then zero-fill up to the carrier's exact capacity. The
//! carrier engine consumes the stream left to right in 2- or 4-bit groups,
//! one group per padded token.

use thiserror::Error;

use crate::{CHAR_BITS, LENGTH_BITS, MAX_SECRET_LEN};

/// Errors that can occur while framing a secret.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Secret has more characters than the 16-bit length prefix can count.
    #[error("Secret is {len} characters long, the maximum is {max}")]
    SecretTooLong {
        /// Actual secret length in characters.
        len: usize,
        /// Maximum representable length.
        max: usize,
    },

    /// Framed secret does not fit in the carrier's padding capacity.
    #[error("Secret needs {required} bits but the carrier only holds {available}")]
    CapacityExceeded {
        /// Bits needed for prefix plus secret.
        required: usize,
        /// Total padding capacity of the carrier.
        available: usize,
    },
}

/// An ordered bit sequence with a read cursor.
///
/// Values are pushed and read most-significant bit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<bool>,
    cursor: usize,
}

impl BitStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of bits in the stream.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Appends the low `width` bits of `value`, most significant first.
    pub fn push_value(&mut self, value: u32, width: usize) {
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Reads the next `width` bits as a big-endian value, advancing the
    /// cursor. Returns `None` if fewer than `width` bits remain.
    pub fn read_value(&mut self, width: usize) -> Option<u32> {
        if self.cursor + width > self.bits.len() {
            return None;
        }
        let mut value = 0u32;
        for _ in 0..width {
            value = (value << 1) | u32::from(self.bits[self.cursor]);
            self.cursor += 1;
        }
        Some(value)
    }

    /// Zero-fills the stream up to `len` bits.
    pub fn pad_to(&mut self, len: usize) {
        while self.bits.len() < len {
            self.bits.push(false);
        }
    }
}

/// Serializes a secret into a framed bit stream of exactly `capacity` bits.
///
/// Fails with `SecretTooLong` before framing if the secret exceeds the
/// length prefix, and with `CapacityExceeded` if prefix plus codes do not
/// fit. Character codes above 127 are truncated modulo 128; the truncation
/// is lossy and deliberate, see `unframe`.
pub fn frame(secret: &str, capacity: usize) -> Result<BitStream, FrameError> {
    let len = secret.chars().count();
    if len > MAX_SECRET_LEN {
        return Err(FrameError::SecretTooLong {
            len,
            max: MAX_SECRET_LEN,
        });
    }

    let required = LENGTH_BITS + CHAR_BITS * len;
    if required > capacity {
        return Err(FrameError::CapacityExceeded {
            required,
            available: capacity,
        });
    }

    let mut stream = BitStream::new();
    stream.push_value(len as u32, LENGTH_BITS);
    for ch in secret.chars() {
        stream.push_value(ch as u32 % 128, CHAR_BITS);
    }
    stream.pad_to(capacity);
    Ok(stream)
}

/// Deserializes a framed bit stream back to the secret text.
///
/// Reads the 16-bit length, then at most that many complete 7-bit codes;
/// fill bits and a truncated trailing group are ignored, and a stream too
/// short for its own length prefix degrades to a shorter secret rather
/// than an error.
pub fn unframe(mut stream: BitStream) -> String {
    let len = match stream.read_value(LENGTH_BITS) {
        Some(v) => v as usize,
        None => return String::new(),
    };

    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        match stream.read_value(CHAR_BITS) {
            Some(code) => secret.push(char::from(code as u8)),
            None => break,
        }
    }
    secret
}
