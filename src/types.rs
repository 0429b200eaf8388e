//! Core data structures for HHC encoding and decoding.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

use crate::core::alphabet::{RADIX, ZERO_DIGIT};

/// Length of every padded 32-bit encoding.
pub const ENCODED_LENGTH_32: usize = 6;

/// Length of every padded 64-bit encoding.
pub const ENCODED_LENGTH_64: usize = 11;

/// Longest encoding of any supported width.
pub const MAX_ENCODED_LENGTH: usize = ENCODED_LENGTH_64;

/// Padded encoding of `u32::MAX`.
pub const ENCODED_MAX_32: &str = "1QLCp1";

/// Padded encoding of `u64::MAX`.
pub const ENCODED_MAX_64: &str = "9lH9ebONzYD";

/// The bit-width policy an encoding is read or written under.
///
/// Each width fixes the largest value it can carry and the number of digits
/// needed to write that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitWidth {
    /// Unsigned 32-bit values, 6 digits.
    W32,
    /// Unsigned 64-bit values, 11 digits.
    W64,
}

impl BitWidth {
    /// Number of bits in the integer type.
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }

    /// Largest value representable under this width.
    pub const fn max_value(self) -> u64 {
        match self {
            BitWidth::W32 => u32::MAX as u64,
            BitWidth::W64 => u64::MAX,
        }
    }

    /// Length of a padded encoding, which is also the longest accepted input.
    pub const fn encoded_length(self) -> usize {
        match self {
            BitWidth::W32 => ENCODED_LENGTH_32,
            BitWidth::W64 => ENCODED_LENGTH_64,
        }
    }

    /// Padded encoding of [`BitWidth::max_value`].
    pub const fn max_encoded(self) -> &'static str {
        match self {
            BitWidth::W32 => ENCODED_MAX_32,
            BitWidth::W64 => ENCODED_MAX_64,
        }
    }

    /// Look up the policy for a bit count. Only 32 and 64 are supported.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(BitWidth::W32),
            64 => Some(BitWidth::W64),
            _ => None,
        }
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// `RADIX^len`, computed without overflow for every length used here.
const fn radix_pow(len: usize) -> u128 {
    let mut acc = 1u128;
    let mut i = 0;
    while i < len {
        acc *= RADIX as u128;
        i += 1;
    }
    acc
}

// Each encoded length is the smallest one that covers its width.
const _: () = {
    assert!(radix_pow(ENCODED_LENGTH_32) > u32::MAX as u128);
    assert!(radix_pow(ENCODED_LENGTH_32 - 1) <= u32::MAX as u128);
    assert!(radix_pow(ENCODED_LENGTH_64) > u64::MAX as u128);
    assert!(radix_pow(ENCODED_LENGTH_64 - 1) <= u64::MAX as u128);
    assert!(ENCODED_MAX_32.len() == ENCODED_LENGTH_32);
    assert!(ENCODED_MAX_64.len() == ENCODED_LENGTH_64);
};

/// An encoding held in a fixed stack buffer.
///
/// Produced by the allocation-free encoders. Dereferences to `&str`, so it
/// can be compared, printed or copied into a `String` when needed.
///
/// ```
/// use hhc::Encoded;
///
/// let encoded = Encoded::padded_32(424242);
/// assert_eq!(&*encoded, "--.TNv");
/// assert_eq!(encoded.len(), 6);
/// ```
#[derive(Clone, Copy)]
pub struct Encoded {
    /// Digits are right-aligned; unused leading bytes hold the zero digit.
    buf: [u8; MAX_ENCODED_LENGTH],
    start: u8,
}

impl Encoded {
    /// `buf` must contain only alphabet bytes and `start` must not exceed its length.
    #[inline(always)]
    pub(crate) fn from_parts(buf: [u8; MAX_ENCODED_LENGTH], start: usize) -> Self {
        debug_assert!(start <= MAX_ENCODED_LENGTH);
        debug_assert!(buf.is_ascii());
        Self {
            buf,
            start: start as u8,
        }
    }

    /// A buffer of zero digits with nothing selected.
    #[inline(always)]
    pub(crate) fn zeroed_buffer() -> [u8; MAX_ENCODED_LENGTH] {
        [ZERO_DIGIT as u8; MAX_ENCODED_LENGTH]
    }

    /// View the encoding as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        let digits = &self.buf[self.start as usize..];
        // SAFETY: the buffer only ever holds bytes from the ASCII alphabet.
        unsafe { std::str::from_utf8_unchecked(digits) }
    }

    /// Copy the encoding into an owned `String`.
    pub fn into_string(self) -> String {
        self.as_str().to_owned()
    }
}

impl Deref for Encoded {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Encoded {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Encoded {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Encoded").field(&self.as_str()).finish()
    }
}

impl PartialEq for Encoded {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Encoded {}

impl PartialEq<str> for Encoded {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Encoded {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Encoded {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered as strings, which matches numeric order for encodings of one width.
impl Ord for Encoded {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl std::hash::Hash for Encoded {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl From<Encoded> for String {
    fn from(encoded: Encoded) -> Self {
        encoded.into_string()
    }
}
