//! Validation helpers that inspect encodings without decoding them.
//!
//! Because the alphabet is sorted, an encoding of a given length can be
//! range-checked by plain string comparison against the width's maximum
//! encoding, with no arithmetic at all.

use crate::core::alphabet::{byte_to_value, ZERO_DIGIT};
use crate::types::BitWidth;

/// Check that `input` is non-empty and made only of alphabet characters.
///
/// Length and range are not checked; see [`fits_width`] for that.
///
/// # Examples
///
/// ```
/// use hhc::is_valid;
///
/// assert!(is_valid("A0.-~_"));
/// assert!(!is_valid("A0.-~_!"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|byte| byte_to_value(byte).is_some())
}

/// Check that `candidate` does not sort above `max_encoded`.
///
/// A candidate shorter than `max_encoded` is always in bounds: for both
/// supported widths every encoding one digit shorter than the maximum length
/// fits the width. Equal-length candidates compare as strings. Both
/// arguments are assumed to be made of alphabet characters.
///
/// # Examples
///
/// ```
/// use hhc::{bounds_check, ENCODED_MAX_32};
///
/// assert!(bounds_check("1QLCp1", ENCODED_MAX_32));
/// assert!(bounds_check("1QLCp0", ENCODED_MAX_32));
/// assert!(!bounds_check("1QLCp2", ENCODED_MAX_32));
/// assert!(bounds_check("1QLCp", ENCODED_MAX_32));
/// ```
pub fn bounds_check(candidate: &str, max_encoded: &str) -> bool {
    use std::cmp::Ordering;

    match candidate.len().cmp(&max_encoded.len()) {
        Ordering::Less => true,
        Ordering::Greater => false,
        Ordering::Equal => candidate <= max_encoded,
    }
}

/// Check, without decoding, whether `input` would decode under `width`.
///
/// Equivalent to `decode(input, width).is_ok()`.
pub fn fits_width(input: &str, width: BitWidth) -> bool {
    is_valid(input) && bounds_check(input, width.max_encoded())
}

/// Strip leading zero digits from an encoding.
///
/// Turns a padded encoding into the unpadded one for the same value. An
/// encoding of zero unpads to the empty string.
///
/// # Examples
///
/// ```
/// use hhc::unpad;
///
/// assert_eq!(unpad("--.TNv"), ".TNv");
/// assert_eq!(unpad("------"), "");
/// ```
pub fn unpad(encoded: &str) -> &str {
    encoded.trim_start_matches(ZERO_DIGIT)
}
