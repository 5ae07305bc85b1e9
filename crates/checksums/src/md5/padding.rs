//! crates/checksums/src/md5/padding.rs
//!
//! Message padding and length suffix (RFC 1321 sections 3.1 and 3.2).

use super::constants::{BLOCK_LEN, LENGTH_SUFFIX_LEN};

/// Marker byte carrying the single `1` bit that starts the padding.
const PAD_MARKER: u8 = 0x80;

/// Returns the message length in bits, reduced modulo 2^64.
#[inline]
pub(crate) const fn bit_length(byte_len: u64) -> u64 {
    byte_len.wrapping_mul(8)
}

/// Returns the length of the padded buffer for an input of `len` bytes.
///
/// The result is the smallest multiple of [`BLOCK_LEN`] that leaves room for
/// the marker byte and the 8-byte length suffix.
#[inline]
pub(crate) const fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_SUFFIX_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Copies `input` into a new buffer padded to a whole number of 64-byte blocks.
///
/// The buffer holds the input, a `0x80` marker, zero bytes until the bit length
/// is congruent to 448 mod 512, and the original length in bits as 8
/// little-endian bytes. Inputs longer than `2^61 - 1` bytes have their bit
/// length taken modulo 2^64, as RFC 1321 specifies; this is not an error.
///
/// # Examples
///
/// ```
/// use checksums::md5::pad_message;
///
/// let padded = pad_message(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded[3], 0x80);
/// assert_eq!(&padded[56..], &24_u64.to_le_bytes());
/// ```
#[must_use]
pub fn pad_message(input: &[u8]) -> Vec<u8> {
    let len = input.len();
    let total = padded_len(len);
    let mut buffer = vec![0_u8; total];
    buffer[..len].copy_from_slice(input);
    buffer[len] = PAD_MARKER;

    let bits = bit_length(len as u64);
    buffer[total - LENGTH_SUFFIX_LEN..].copy_from_slice(&bits.to_le_bytes());
    buffer
}
