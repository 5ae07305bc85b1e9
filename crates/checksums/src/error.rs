//! crates/checksums/src/error.rs
//!
//! Errors raised when decoding a hexadecimal digest.

use thiserror::Error;

/// Error returned when a string is not a valid 32-character hexadecimal MD5 digest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ParseDigestError {
    /// The input did not contain exactly 32 characters.
    #[error("MD5 digest requires 32 hex characters, received {len}")]
    InvalidLength {
        /// Number of characters supplied.
        len: usize,
    },
    /// The input contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {character:?} at position {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character position within the input.
        index: usize,
    },
}
