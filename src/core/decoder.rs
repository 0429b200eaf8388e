//! HHC decoding functionality.
//!
//! One decoder serves both padded and unpadded input. Checks run in a fixed
//! order and the first failure wins: empty input, then length, then
//! characters (left to right), then range.

use crate::core::alphabet::{byte_to_value, RADIX};
use crate::error::HhcError;
use crate::types::BitWidth;

/// Decode an HHC string under the given width.
///
/// The value is accumulated in a `u128`, which holds any 11 digit input
/// without wrapping, so an out-of-range input is always reported as
/// [`HhcError::RangeOverflow`] and never folded back into range.
///
/// # Arguments
///
/// * `input` - Padded or unpadded encoding
/// * `width` - The bit-width policy to decode under
///
/// # Errors
///
/// * [`HhcError::EmptyInput`] if `input` is empty
/// * [`HhcError::LengthExceeded`] if `input` has more characters than
///   `width.encoded_length()`. This is checked before characters.
/// * [`HhcError::InvalidCharacter`] for the first character outside the alphabet
/// * [`HhcError::RangeOverflow`] if the value exceeds `width.max_value()`
///
/// # Examples
///
/// ```
/// use hhc::{decode, BitWidth, HhcError};
///
/// assert_eq!(decode("--.TNv", BitWidth::W32)?, 424242);
/// assert_eq!(decode(".TNv", BitWidth::W32)?, 424242);
///
/// assert!(matches!(
///     decode("1QLCp2", BitWidth::W32),
///     Err(HhcError::RangeOverflow { .. })
/// ));
/// # Ok::<(), HhcError>(())
/// ```
#[inline]
pub fn decode(input: &str, width: BitWidth) -> Result<u64, HhcError> {
    let bytes = input.as_bytes();
    let max_len = width.encoded_length();

    if bytes.is_empty() {
        return Err(empty_input());
    }

    // More bytes than allowed may still be few enough characters; any such
    // input holds a non-ASCII character and fails the character check.
    if bytes.len() > max_len {
        let actual = input.chars().count();
        if actual > max_len {
            return Err(length_exceeded(input, actual, max_len));
        }
    }

    let mut acc: u128 = 0;
    for (position, &byte) in bytes.iter().enumerate() {
        let Some(digit) = byte_to_value(byte) else {
            // Every byte before `position` was an ASCII digit, so it is
            // also the character index and a char boundary.
            return Err(invalid_character(input, position));
        };
        acc = acc * RADIX as u128 + digit as u128;
    }

    let max = width.max_value();
    if acc > max as u128 {
        return Err(range_overflow(input, acc, max));
    }

    Ok(acc as u64)
}

/// Decode a 32-bit value from its padded or unpadded encoding.
///
/// # Examples
///
/// ```
/// use hhc::decode_32;
///
/// assert_eq!(decode_32("-").unwrap(), 0);
/// assert_eq!(decode_32(".").unwrap(), 1);
/// assert_eq!(decode_32("1QLCp1").unwrap(), u32::MAX);
/// assert!(decode_32("1QLCp2").is_err());
/// assert!(decode_32("").is_err());
/// ```
#[inline]
pub fn decode_32(input: &str) -> Result<u32, HhcError> {
    // In range by the width check inside `decode`.
    decode(input, BitWidth::W32).map(|value| value as u32)
}

/// Decode a 64-bit value from its padded or unpadded encoding.
///
/// # Examples
///
/// ```
/// use hhc::decode_64;
///
/// assert_eq!(decode_64("9lH9ebONzYD").unwrap(), u64::MAX);
/// assert_eq!(decode_64("5tVfK4").unwrap(), 9876543210);
/// assert!(decode_64("9lH9ebONzYE").is_err());
/// ```
#[inline]
pub fn decode_64(input: &str) -> Result<u64, HhcError> {
    decode(input, BitWidth::W64)
}

#[cold]
fn empty_input() -> HhcError {
    tracing::debug!("rejecting empty input");
    HhcError::EmptyInput
}

#[cold]
fn length_exceeded(input: &str, actual: usize, max: usize) -> HhcError {
    tracing::debug!(input, actual, max, "rejecting input longer than its width allows");
    HhcError::LengthExceeded { actual, max }
}

#[cold]
fn invalid_character(input: &str, position: usize) -> HhcError {
    let character = input[position..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    tracing::debug!(input, position, ?character, "rejecting character outside the alphabet");
    HhcError::InvalidCharacter { position, character }
}

#[cold]
fn range_overflow(input: &str, value: u128, max: u64) -> HhcError {
    tracing::debug!(input, value = %value, max, "rejecting value outside its width");
    HhcError::RangeOverflow { value, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::encoder::{encode_padded_32, encode_padded_64};

    #[test]
    fn test_decode_32_bounds() {
        assert_eq!(decode_32("------"), Ok(u32::MIN));
        assert_eq!(decode_32("1QLCp1"), Ok(u32::MAX));
    }

    #[test]
    fn test_decode_64_bounds() {
        assert_eq!(decode_64("-----------"), Ok(u64::MIN));
        assert_eq!(decode_64("9lH9ebONzYD"), Ok(u64::MAX));
    }

    #[test]
    fn test_single_digits() {
        assert_eq!(decode_32("-"), Ok(0));
        assert_eq!(decode_32("."), Ok(1));
        assert_eq!(decode_64("-"), Ok(0));
        assert_eq!(decode_64("."), Ok(1));
        assert_eq!(decode_32("~"), Ok(65));
    }

    #[test]
    fn test_padding_is_ignored() {
        assert_eq!(decode_32("------"), decode_32("-"));
        assert_eq!(decode_32("-----."), decode_32("."));
        assert_eq!(decode_64("------"), Ok(0));
        assert_eq!(decode_64("-----."), Ok(1));
    }

    #[test]
    fn test_range_overflow_32() {
        assert_eq!(
            decode_32("1QLCp2"),
            Err(HhcError::RangeOverflow {
                value: u32::MAX as u128 + 1,
                max: u32::MAX as u64
            })
        );
        assert_eq!(
            decode_32("~~~~~~"),
            Err(HhcError::RangeOverflow {
                value: 82_653_950_015,
                max: u32::MAX as u64
            })
        );
    }

    #[test]
    fn test_range_overflow_64_does_not_wrap() {
        assert_eq!(
            decode_64("9lH9ebONzYE"),
            Err(HhcError::RangeOverflow {
                value: u64::MAX as u128 + 1,
                max: u64::MAX
            })
        );
        assert_eq!(
            decode_64("~~~~~~~~~~~"),
            Err(HhcError::RangeOverflow {
                value: 103_510_234_140_112_521_215,
                max: u64::MAX
            })
        );
    }

    #[test]
    fn test_empty_input_rejected_by_both_widths() {
        assert_eq!(decode_32(""), Err(HhcError::EmptyInput));
        assert_eq!(decode_64(""), Err(HhcError::EmptyInput));
    }

    #[test]
    fn test_length_exceeded() {
        assert_eq!(
            decode_32("1QLC0.-"),
            Err(HhcError::LengthExceeded { actual: 7, max: 6 })
        );
        assert_eq!(
            decode_64("9lH9ebONzYD1"),
            Err(HhcError::LengthExceeded { actual: 12, max: 11 })
        );
    }

    #[test]
    fn test_length_takes_precedence_over_characters() {
        assert_eq!(
            decode_32("INVALID!"),
            Err(HhcError::LengthExceeded { actual: 8, max: 6 })
        );
    }

    #[test]
    fn test_invalid_character_position() {
        assert_eq!(
            decode_32("1QLCP!"),
            Err(HhcError::InvalidCharacter { position: 5, character: '!' })
        );
        assert_eq!(
            decode_64("9lH9ebONz!D"),
            Err(HhcError::InvalidCharacter { position: 9, character: '!' })
        );
        assert_eq!(
            decode_64("INVALID!"),
            Err(HhcError::InvalidCharacter { position: 7, character: '!' })
        );
    }

    #[test]
    fn test_first_invalid_character_wins() {
        assert_eq!(
            decode_32("a b!"),
            Err(HhcError::InvalidCharacter { position: 1, character: ' ' })
        );
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(
            decode_32("ab\u{e9}cd"),
            Err(HhcError::InvalidCharacter { position: 2, character: '\u{e9}' })
        );
        // 6 characters, 7 bytes: a character error, not a length error.
        assert_eq!(
            decode_32("abcde\u{e9}"),
            Err(HhcError::InvalidCharacter { position: 5, character: '\u{e9}' })
        );
        assert_eq!(
            decode_32("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"),
            Err(HhcError::LengthExceeded { actual: 7, max: 6 })
        );
    }

    #[test]
    fn test_round_trip_first_values() {
        for value in 0u32..100_000 {
            assert_eq!(decode_32(&encode_padded_32(value)), Ok(value));
        }
        for value in 0u64..100_000 {
            assert_eq!(decode_64(&encode_padded_64(value)), Ok(value));
        }
    }
}
