//! Property tests: round trips, fixed lengths and sort order.

use hhc::*;
use proptest::prelude::*;
use rand::Rng;

proptest! {
    #[test]
    fn padded_32_round_trips(value: u32) {
        let encoded = encode_padded_32(value);
        prop_assert_eq!(encoded.len(), ENCODED_LENGTH_32);
        prop_assert_eq!(decode_32(&encoded), Ok(value));
    }

    #[test]
    fn padded_64_round_trips(value: u64) {
        let encoded = encode_padded_64(value);
        prop_assert_eq!(encoded.len(), ENCODED_LENGTH_64);
        prop_assert_eq!(decode_64(&encoded), Ok(value));
    }

    #[test]
    fn unpadded_32_round_trips(value in 1u32..=u32::MAX) {
        let encoded = encode_unpadded_32(value);
        prop_assert!(!encoded.starts_with(ZERO_DIGIT));
        prop_assert_eq!(decode_32(&encoded), Ok(value));
    }

    #[test]
    fn unpadded_64_round_trips(value in 1u64..=u64::MAX) {
        let encoded = encode_unpadded_64(value);
        prop_assert!(!encoded.starts_with(ZERO_DIGIT));
        prop_assert_eq!(decode_64(&encoded), Ok(value));
    }

    #[test]
    fn unpad_of_padded_is_unpadded(value: u64) {
        let padded = encode_padded_64(value);
        prop_assert_eq!(unpad(&padded), encode_unpadded_64(value));
    }

    #[test]
    fn padded_32_preserves_order(a: u32, b: u32) {
        prop_assert_eq!(a.cmp(&b), encode_padded_32(a).cmp(&encode_padded_32(b)));
    }

    #[test]
    fn padded_64_preserves_order(a: u64, b: u64) {
        prop_assert_eq!(a.cmp(&b), encode_padded_64(a).cmp(&encode_padded_64(b)));
    }

    #[test]
    fn fits_width_agrees_with_decode(input in "[-.0-9A-Z_a-z~]{0,12}") {
        prop_assert_eq!(fits_width(&input, BitWidth::W32), decode(&input, BitWidth::W32).is_ok());
        prop_assert_eq!(fits_width(&input, BitWidth::W64), decode(&input, BitWidth::W64).is_ok());
    }

    #[test]
    fn decode_never_panics(input in "\\PC{0,16}") {
        let _ = decode_32(&input);
        let _ = decode_64(&input);
    }

    #[test]
    fn out_of_range_32_is_reported_not_wrapped(value in (u32::MAX as u64 + 1)..82_653_950_016u64) {
        // Every value below 66^6 still has a 6 digit encoding.
        let encoded = encode_padded_64(value);
        let encoded = &encoded[ENCODED_LENGTH_64 - ENCODED_LENGTH_32..];
        prop_assert_eq!(
            decode_32(&encoded),
            Err(HhcError::RangeOverflow { value: value as u128, max: u32::MAX as u64 })
        );
    }
}

#[test]
fn random_32_bit_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..100_000 {
        let value: u32 = rng.gen();
        assert_eq!(decode_32(&encode_padded_32(value)), Ok(value));
        if value != 0 {
            assert_eq!(decode_32(&encode_unpadded_32(value)), Ok(value));
        }
    }
}

#[test]
fn random_64_bit_round_trips() {
    let mut rng = rand::thread_rng();
    for _ in 0..100_000 {
        let value: u64 = rng.gen();
        assert_eq!(decode_64(&encode_padded_64(value)), Ok(value));
        if value != 0 {
            assert_eq!(decode_64(&encode_unpadded_64(value)), Ok(value));
        }
    }
}

#[test]
fn random_strings_are_never_misread() {
    // Any 6 digit string either decodes to the value it denotes or is
    // reported as out of range; it is never folded back into range.
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        let input: String = (0..ENCODED_LENGTH_32)
            .map(|_| ALPHABET_BYTES[rng.gen_range(0..RADIX)] as char)
            .collect();
        let expected = input
            .bytes()
            .fold(0u128, |acc, byte| acc * RADIX as u128 + char_to_value(byte as char).unwrap() as u128);

        match decode_32(&input) {
            Ok(value) => assert_eq!(value as u128, expected),
            Err(HhcError::RangeOverflow { value, .. }) => {
                assert_eq!(value, expected);
                assert!(value > u32::MAX as u128);
            }
            Err(other) => panic!("unexpected error for {:?}: {}", input, other),
        }
    }
}
