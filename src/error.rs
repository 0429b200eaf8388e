//! Error types for HHC decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding an HHC string.
///
/// Encoding a value that fits its width never fails. The width-generic
/// encoders report a value that does not fit as [`HhcError::RangeOverflow`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HhcError {
    /// The input was empty. Zero is written as a single zero digit (`-`).
    #[error("Empty input: zero must be written as \"-\"")]
    EmptyInput,

    /// The input is longer than the width's maximum encoded length.
    #[error("Input length {actual} exceeds maximum encoded length {max}")]
    LengthExceeded {
        /// Input length in characters.
        actual: usize,
        /// Maximum encoded length for the width.
        max: usize,
    },

    /// A character outside the alphabet was found.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Zero-based character index of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The input is well formed but its value does not fit the width.
    #[error("Decoded value {value} exceeds maximum value {max}")]
    RangeOverflow {
        /// The value the input denotes.
        value: u128,
        /// Largest value representable under the width.
        max: u64,
    },
}

/// Broad classification of [`HhcError`], for callers that surface only two
/// failure kinds (malformed input vs. out-of-range value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not a well-formed encoding.
    InvalidInput,
    /// The input is well formed but denotes a value too large for the width.
    OutOfRange,
}

impl HhcError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            HhcError::EmptyInput
            | HhcError::LengthExceeded { .. }
            | HhcError::InvalidCharacter { .. } => ErrorKind::InvalidInput,
            HhcError::RangeOverflow { .. } => ErrorKind::OutOfRange,
        }
    }
}
