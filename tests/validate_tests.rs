//! Tests for the validation helpers.

use hhc::{bounds_check, decode, fits_width, is_valid, unpad, BitWidth};
use hhc::{encode_padded_32, encode_unpadded_32, ENCODED_MAX_32, ENCODED_MAX_64};

#[test]
fn test_validate_string() {
    assert!(is_valid("A0.-~_"));
    assert!(!is_valid("!0.-~_"));
    assert!(!is_valid("A0.-~_!"));
    assert!(!is_valid("!\n{}!"));
    assert!(!is_valid(""));
    assert!(is_valid(ENCODED_MAX_32));
    assert!(is_valid(ENCODED_MAX_64));
}

#[test]
fn test_bounds_check_against_max_strings() {
    let mut lower = ENCODED_MAX_32.to_string();
    lower.pop();
    lower.push('0');
    assert!(bounds_check(&lower, ENCODED_MAX_32));

    let mut higher = ENCODED_MAX_64.to_string();
    higher.pop();
    higher.push('E');
    assert!(!bounds_check(&higher, ENCODED_MAX_64));

    let mut shorter = ENCODED_MAX_64.to_string();
    shorter.pop();
    assert!(bounds_check(&shorter, ENCODED_MAX_64));
}

#[test]
fn test_fits_width_matches_decode() {
    let inputs = [
        "", "-", ".", "------", "1QLCp1", "1QLCp2", "~~~~~~", "~~~~~~~",
        "9lH9ebONzYD", "9lH9ebONzYE", "INVALID!", "abc def",
    ];

    for input in inputs {
        for width in [BitWidth::W32, BitWidth::W64] {
            assert_eq!(
                fits_width(input, width),
                decode(input, width).is_ok(),
                "{:?} under {}",
                input,
                width
            );
        }
    }
}

#[test]
fn test_unpad_matches_unpadded_encoder() {
    for value in [0u32, 1, 66, 424242, u32::MAX] {
        assert_eq!(unpad(&encode_padded_32(value)), encode_unpadded_32(value));
    }
}
