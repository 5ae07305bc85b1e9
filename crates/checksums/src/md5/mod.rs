//! crates/checksums/src/md5/mod.rs
//!
//! One-shot MD5 over a fully materialised buffer.
//!
//! The pipeline runs in four stages: pad the input and append its bit length,
//! start from the fixed initial registers, compress each 64-byte block in
//! order, and serialise the final registers. Every stage works on values
//! owned by the current call.

mod constants;
mod padding;
mod rounds;

pub use constants::BLOCK_LEN;
pub use padding::pad_message;

use crate::digest::Md5Digest;
use rounds::{State, compress};

/// Computes the MD5 digest of `input`.
///
/// Total over all byte sequences, including the empty one.
///
/// # Examples
///
/// ```
/// let digest = checksums::md5::digest(b"");
/// assert_eq!(digest.to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[must_use]
pub fn digest(input: &[u8]) -> Md5Digest {
    let padded = pad_message(input);
    let state = padded
        .chunks_exact(BLOCK_LEN)
        .fold(State::initial(), compress);
    Md5Digest::from_bytes(state.to_bytes())
}

/// Computes the MD5 digest of `input` and renders it as lowercase hex.
///
/// Text inputs are hashed as their UTF-8 bytes.
///
/// # Examples
///
/// ```
/// assert_eq!(
///     checksums::md5::hash("message digest"),
///     "f96b697d7cb7938d525a2f31aaf161d0"
/// );
/// ```
#[must_use]
pub fn hash(input: impl AsRef<[u8]>) -> String {
    digest(input.as_ref()).to_hex()
}
