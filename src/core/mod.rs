//! Core HHC encoding and decoding functionality.
//!
//! This module contains the codec itself:
//! - The alphabet and its inverse lookup table
//! - Padded and unpadded encoders
//! - The unified decoder
//! - Validation helpers that work on encodings directly

pub mod alphabet;
pub mod encoder;
pub mod decoder;
pub mod validate;

// Re-export main functionality
pub use alphabet::{char_to_value, value_to_char, ALPHABET, ALPHABET_BYTES, RADIX, ZERO_DIGIT};
pub use encoder::{
    encode_padded, encode_padded_32, encode_padded_64, encode_unpadded, encode_unpadded_32,
    encode_unpadded_64, HhcCodec,
};
pub use decoder::{decode, decode_32, decode_64};
pub use validate::{bounds_check, fits_width, is_valid, unpad};
