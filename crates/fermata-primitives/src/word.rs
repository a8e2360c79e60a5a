//! 256-bit machine word with unsigned and two's-complement signed readings

use primitive_types::U256;
use std::fmt;
use thiserror::Error;

/// Word parsing error
#[derive(Debug, Error)]
pub enum WordError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid word length: expected at most 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// A 256-bit VM word.
///
/// The same bit pattern carries two readings: an unsigned magnitude in
/// `[0, 2^256 - 1]` and a two's-complement signed value in
/// `[-2^255, 2^255 - 1]` (bit 255 set means negative). A `Word` is
/// immutable; arithmetic lives in the VM crate and always produces a new
/// word or a typed failure, never an in-place update.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Word(U256);

impl Word {
    /// Size in bytes
    pub const LEN: usize = 32;

    /// The zero word
    pub const ZERO: Word = Word(U256([0, 0, 0, 0]));

    /// The word one
    pub const ONE: Word = Word(U256([1, 0, 0, 0]));

    /// Unsigned maximum, 2^256 - 1 (reads as -1 under the signed view)
    pub const MAX: Word = Word(U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX]));

    /// Signed maximum, 2^255 - 1 (0x7fff...ff)
    pub const SIGNED_MAX: Word = Word(U256([u64::MAX, u64::MAX, u64::MAX, u64::MAX >> 1]));

    /// Signed minimum, -2^255 (0x8000...00)
    pub const SIGNED_MIN: Word = Word(U256([0, 0, 0, 1 << 63]));

    /// Create a word from a raw 256-bit value
    pub const fn new(value: U256) -> Self {
        Word(value)
    }

    /// The raw 256-bit value (unsigned reading)
    pub fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if this is the zero word
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check whether bit 255 is set, i.e. the signed reading is negative
    pub fn is_negative(&self) -> bool {
        self.0.bit(255)
    }

    /// Decode the signed reading into a sign flag and a magnitude.
    ///
    /// Returns `(negative, magnitude)`. The magnitude of [`Word::SIGNED_MIN`]
    /// is 2^255, which still fits a `U256`.
    pub fn to_sign_magnitude(self) -> (bool, U256) {
        if self.is_negative() {
            let (magnitude, _) = (!self.0).overflowing_add(U256::one());
            (true, magnitude)
        } else {
            (false, self.0)
        }
    }

    /// Re-encode a sign flag and magnitude into two's-complement form.
    ///
    /// The caller guarantees the value is representable: magnitude at most
    /// 2^255 - 1 when non-negative, at most 2^255 when negative. A zero
    /// magnitude always encodes as the all-zero word, never "negative zero".
    pub fn from_sign_magnitude(negative: bool, magnitude: U256) -> Self {
        if negative && !magnitude.is_zero() {
            let (bits, _) = (!magnitude).overflowing_add(U256::one());
            Word(bits)
        } else {
            Word(magnitude)
        }
    }

    /// Create from big-endian bytes
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Word(U256::from_big_endian(&bytes))
    }

    /// Convert to big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        bytes
    }

    /// Parse from a hex string (with or without 0x prefix, at most 32 bytes)
    pub fn from_hex(s: &str) -> Result<Self, WordError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| WordError::InvalidHex(e.to_string()))?;
        if bytes.len() > 32 {
            return Err(WordError::InvalidLength(bytes.len()));
        }
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(&bytes);
        Ok(Self::from_be_bytes(buf))
    }

    /// Convert to a full-width hex string with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_be_bytes()))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.to_hex())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<U256> for Word {
    fn from(value: U256) -> Self {
        Word(value)
    }
}

impl From<u64> for Word {
    fn from(value: u64) -> Self {
        Word(U256::from(value))
    }
}
