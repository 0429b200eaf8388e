//! HHC encoding functionality.
//!
//! Every encoder shares one digit loop: repeated division by the radix,
//! least significant digit written last, into a stack buffer pre-filled with
//! the zero digit. Padded and unpadded forms only differ in where the
//! returned view starts.

use crate::core::alphabet::{value_to_byte, RADIX};
use crate::error::HhcError;
use crate::types::{BitWidth, Encoded, ENCODED_LENGTH_32, ENCODED_LENGTH_64, MAX_ENCODED_LENGTH};

/// Write the digits of `value` right-aligned into a zero-filled buffer.
///
/// Returns the buffer and the index of the most significant non-zero
/// digit (`MAX_ENCODED_LENGTH` for zero).
#[inline(always)]
fn write_digits(mut value: u64) -> ([u8; MAX_ENCODED_LENGTH], usize) {
    let mut buf = Encoded::zeroed_buffer();
    let mut cursor = MAX_ENCODED_LENGTH;

    while value != 0 {
        cursor -= 1;
        buf[cursor] = value_to_byte((value % RADIX as u64) as usize);
        value /= RADIX as u64;
    }

    (buf, cursor)
}

#[inline(always)]
fn padded(value: u64, length: usize) -> Encoded {
    let (buf, _) = write_digits(value);
    Encoded::from_parts(buf, MAX_ENCODED_LENGTH - length)
}

#[inline(always)]
fn unpadded(value: u64) -> Encoded {
    let (buf, start) = write_digits(value);
    Encoded::from_parts(buf, start)
}

impl Encoded {
    /// Padded 32-bit encoding, always 6 characters.
    #[inline]
    pub fn padded_32(value: u32) -> Self {
        padded(value as u64, ENCODED_LENGTH_32)
    }

    /// Unpadded 32-bit encoding, 0 to 6 characters.
    #[inline]
    pub fn unpadded_32(value: u32) -> Self {
        unpadded(value as u64)
    }

    /// Padded 64-bit encoding, always 11 characters.
    #[inline]
    pub fn padded_64(value: u64) -> Self {
        padded(value, ENCODED_LENGTH_64)
    }

    /// Unpadded 64-bit encoding, 0 to 11 characters.
    #[inline]
    pub fn unpadded_64(value: u64) -> Self {
        unpadded(value)
    }
}

/// Encode a 32-bit value into its fixed-length, 6 character form.
///
/// Leading positions are filled with the zero digit `-`, so encodings sort
/// in the same order as the values they encode.
///
/// # Examples
///
/// ```
/// use hhc::encode_padded_32;
///
/// assert_eq!(encode_padded_32(0), "------");
/// assert_eq!(encode_padded_32(424242), "--.TNv");
/// assert_eq!(encode_padded_32(u32::MAX), "1QLCp1");
/// ```
pub fn encode_padded_32(value: u32) -> String {
    Encoded::padded_32(value).into_string()
}

/// Encode a 32-bit value into its shortest form.
///
/// Zero encodes to the empty string.
///
/// # Examples
///
/// ```
/// use hhc::encode_unpadded_32;
///
/// assert_eq!(encode_unpadded_32(0), "");
/// assert_eq!(encode_unpadded_32(1), ".");
/// assert_eq!(encode_unpadded_32(424242), ".TNv");
/// ```
pub fn encode_unpadded_32(value: u32) -> String {
    Encoded::unpadded_32(value).into_string()
}

/// Encode a 64-bit value into its fixed-length, 11 character form.
///
/// # Examples
///
/// ```
/// use hhc::encode_padded_64;
///
/// assert_eq!(encode_padded_64(9876543210), "-----5tVfK4");
/// assert_eq!(encode_padded_64(u64::MAX), "9lH9ebONzYD");
/// ```
pub fn encode_padded_64(value: u64) -> String {
    Encoded::padded_64(value).into_string()
}

/// Encode a 64-bit value into its shortest form. Zero encodes to `""`.
pub fn encode_unpadded_64(value: u64) -> String {
    Encoded::unpadded_64(value).into_string()
}

/// Encode `value` in padded form under a runtime-selected width.
///
/// # Arguments
///
/// * `value` - The value to encode
/// * `width` - The bit-width policy to encode under
///
/// # Returns
///
/// The padded encoding, or [`HhcError::RangeOverflow`] if `value` exceeds
/// `width.max_value()`.
///
/// # Examples
///
/// ```
/// use hhc::{encode_padded, BitWidth, HhcError};
///
/// let encoded = encode_padded(66, BitWidth::W32)?;
/// assert_eq!(encoded, "----.-");
///
/// let too_big = encode_padded(1 << 32, BitWidth::W32);
/// assert!(matches!(too_big, Err(HhcError::RangeOverflow { .. })));
/// # Ok::<(), HhcError>(())
/// ```
pub fn encode_padded(value: u64, width: BitWidth) -> Result<Encoded, HhcError> {
    check_range(value, width)?;
    Ok(padded(value, width.encoded_length()))
}

/// Encode `value` in unpadded form under a runtime-selected width.
///
/// Fails with [`HhcError::RangeOverflow`] if `value` exceeds `width.max_value()`.
pub fn encode_unpadded(value: u64, width: BitWidth) -> Result<Encoded, HhcError> {
    check_range(value, width)?;
    Ok(unpadded(value))
}

fn check_range(value: u64, width: BitWidth) -> Result<(), HhcError> {
    if value > width.max_value() {
        tracing::debug!(value, %width, "refusing to encode value wider than its width");
        return Err(HhcError::RangeOverflow {
            value: value as u128,
            max: width.max_value(),
        });
    }
    Ok(())
}

/// Encoder bound to one bit-width policy.
///
/// Useful when the width is chosen at runtime (for example from user input)
/// and then used for many values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HhcCodec {
    width: BitWidth,
}

impl HhcCodec {
    /// Create a codec for the given width.
    pub fn new(width: BitWidth) -> Self {
        Self { width }
    }

    /// The width this codec encodes and decodes under.
    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// Encode in padded form. See [`encode_padded`].
    pub fn encode_padded(&self, value: u64) -> Result<Encoded, HhcError> {
        encode_padded(value, self.width)
    }

    /// Encode in unpadded form. See [`encode_unpadded`].
    pub fn encode_unpadded(&self, value: u64) -> Result<Encoded, HhcError> {
        encode_unpadded(value, self.width)
    }

    /// Decode under this codec's width. See [`crate::decode`].
    pub fn decode(&self, input: &str) -> Result<u64, HhcError> {
        crate::core::decoder::decode(input, self.width)
    }
}

impl Default for HhcCodec {
    fn default() -> Self {
        Self::new(BitWidth::W64)
    }
}
