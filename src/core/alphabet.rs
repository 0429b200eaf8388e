//! The HHC alphabet and its inverse lookup table.
//!
//! Both tables are built at compile time and never change. The alphabet is
//! strictly ascending by codepoint, so comparing two encodings of the same
//! length byte-by-byte gives the same answer as comparing the numbers they
//! encode.

/// Number of symbols in the alphabet, which is also the radix of every encoding.
pub const RADIX: usize = 66;

/// The alphabet, ordered so that codepoint order equals digit order.
///
/// This ordering is part of the wire format. Changing it breaks every
/// previously encoded value.
pub const ALPHABET: &str = "-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~";

/// The alphabet as a byte array, used by the encode and decode hot paths.
pub const ALPHABET_BYTES: &[u8; RADIX] =
    b"-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~";

/// The digit with value 0, used to left-fill padded encodings.
pub const ZERO_DIGIT: char = ALPHABET_BYTES[0] as char;

/// Marks bytes that are not part of the alphabet.
const NOT_IN_ALPHABET: u8 = 0xFF;

/// Byte -> digit value lookup. Bytes outside the alphabet map to `NOT_IN_ALPHABET`.
static INVERSE_ALPHABET: [u8; 256] = {
    let mut table = [NOT_IN_ALPHABET; 256];
    let mut i = 0;
    while i < RADIX {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

// Both spellings of the alphabet agree, and the ordering is strictly ascending.
const _: () = {
    let text = ALPHABET.as_bytes();
    assert!(text.len() == RADIX);
    let mut i = 0;
    while i < RADIX {
        assert!(text[i] == ALPHABET_BYTES[i]);
        assert!(ALPHABET_BYTES[i].is_ascii_graphic());
        if i > 0 {
            assert!(ALPHABET_BYTES[i - 1] < ALPHABET_BYTES[i]);
        }
        i += 1;
    }
};

/// Map a digit value to its alphabet character.
///
/// Returns `None` when `digit` is not below [`RADIX`].
///
/// # Examples
///
/// ```
/// use hhc::value_to_char;
///
/// assert_eq!(value_to_char(0), Some('-'));
/// assert_eq!(value_to_char(1), Some('.'));
/// assert_eq!(value_to_char(65), Some('~'));
/// assert_eq!(value_to_char(66), None);
/// ```
pub fn value_to_char(digit: u8) -> Option<char> {
    ALPHABET_BYTES.get(digit as usize).map(|&byte| byte as char)
}

/// Map an alphabet character to its digit value.
///
/// Returns `None` for any character outside the alphabet, including every
/// non-ASCII character.
///
/// # Examples
///
/// ```
/// use hhc::char_to_value;
///
/// assert_eq!(char_to_value('-'), Some(0));
/// assert_eq!(char_to_value('~'), Some(65));
/// assert_eq!(char_to_value('!'), None);
/// ```
pub fn char_to_value(character: char) -> Option<u8> {
    if character.is_ascii() {
        byte_to_value(character as u8)
    } else {
        None
    }
}

/// Byte-level variant of [`char_to_value`] used by the decoder.
#[inline(always)]
pub(crate) fn byte_to_value(byte: u8) -> Option<u8> {
    match INVERSE_ALPHABET[byte as usize] {
        NOT_IN_ALPHABET => None,
        digit => Some(digit),
    }
}

/// Digit value -> alphabet byte. `digit` must be below [`RADIX`].
#[inline(always)]
pub(crate) fn value_to_byte(digit: usize) -> u8 {
    ALPHABET_BYTES[digit]
}
