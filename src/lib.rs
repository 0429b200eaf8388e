//! HHC - sortable text encoding for 32-bit and 64-bit integers
//!
//! This crate converts unsigned integers to and from short printable strings
//! over a fixed 66 character alphabet.
//!
//! # Features
//!
//! - **Compact**: 32-bit values fit in 6 characters, 64-bit values in 11
//! - **Exact**: every value round-trips, and out-of-range input is rejected
//! - **Sortable**: padded encodings sort in the same order as their values
//! - **Allocation-light**: decoding never allocates; [`Encoded`] encodes on the stack
//!
//! # Quick Start
//!
//! ```
//! use hhc::{decode_32, decode_64, encode_padded_32, encode_unpadded_64};
//!
//! let padded = encode_padded_32(424242);
//! assert_eq!(padded, "--.TNv");
//! assert_eq!(decode_32(&padded)?, 424242);
//!
//! let unpadded = encode_unpadded_64(9876543210);
//! assert_eq!(unpadded, "5tVfK4");
//! assert_eq!(decode_64(&unpadded)?, 9876543210);
//!
//! // Padded encodings sort like the numbers they encode.
//! assert!(encode_padded_32(99) < encode_padded_32(100));
//! # Ok::<(), hhc::HhcError>(())
//! ```
//!
//! # Alphabet
//!
//! ```text
//! -.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~
//! ```
//!
//! `-` is digit 0 and is used for padding, `~` is digit 65. The characters
//! are in ascending ASCII order, which is what makes encodings sortable.
//!
//! | Width  | Encoded length | Maximum value          | Maximum encoding |
//! |--------|----------------|------------------------|------------------|
//! | 32-bit | 6              | 4294967295             | `1QLCp1`         |
//! | 64-bit | 11             | 18446744073709551615   | `9lH9ebONzYD`    |
//!
//! # Error Handling
//!
//! Decoding returns `Result<_, HhcError>`. Checks run in a fixed order and
//! the first failure is reported:
//!
//! - Empty input (zero is written `-`, not `""`)
//! - Input longer than the width's encoded length
//! - A character outside the alphabet
//! - A value larger than the width's maximum

// Re-export main encoding functions
pub use crate::core::{
    encode_padded, encode_padded_32, encode_padded_64, encode_unpadded, encode_unpadded_32,
    encode_unpadded_64, HhcCodec,
};

// Re-export main decoding functions
pub use crate::core::{decode, decode_32, decode_64};

// Re-export validation helpers
pub use crate::core::{bounds_check, fits_width, is_valid, unpad};

// Re-export alphabet
pub use crate::core::{char_to_value, value_to_char, ALPHABET, ALPHABET_BYTES, RADIX, ZERO_DIGIT};

// Re-export public types
pub use error::{ErrorKind, HhcError};
pub use types::{
    BitWidth, Encoded, ENCODED_LENGTH_32, ENCODED_LENGTH_64, ENCODED_MAX_32, ENCODED_MAX_64,
    MAX_ENCODED_LENGTH,
};

// Module declarations
pub mod error;
pub mod types;
pub mod core;
pub mod logging;
