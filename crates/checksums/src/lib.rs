#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` is a from-scratch implementation of the MD5 message digest
//! (RFC 1321). It maps any finite byte sequence to a 128-bit [`Md5Digest`],
//! which renders as 32 hexadecimal characters.
//!
//! # Design
//!
//! The engine digests a fully materialised buffer in one call: the input is
//! copied into a padded buffer ([`md5::pad_message`]), the fixed initial
//! registers are folded through the compression function once per 64-byte
//! block, and the final registers are serialised little-endian. There is no
//! streaming interface.
//!
//! # Invariants
//!
//! - Working state (registers, message words, padded buffer) is local to each
//!   call; the only shared data is the immutable constant table. Digests can
//!   be computed concurrently from any number of threads.
//! - All register arithmetic wraps modulo 2^32.
//! - The bit-length suffix is the input length in bits modulo 2^64.
//! - The engine never logs, panics on input, or performs I/O.
//!
//! # Examples
//!
//! ```
//! assert_eq!(checksums::hash("abc"), "900150983cd24fb0d6963f7d28e17f72");
//!
//! let digest = checksums::digest(b"message digest");
//! assert!(digest.matches_hex("F96B697D7CB7938D525A2F31AAF161D0"));
//! ```
//!
//! # Features
//!
//! - `parallel` (default): [`digest_batch`] spreads work over rayon's pool.
//! - `serde`: [`Md5Digest`] serialises as its lowercase hex rendering.

mod batch;
mod digest;
mod error;
pub mod md5;

pub use batch::digest_batch;
pub use digest::{DIGEST_HEX_LEN, DIGEST_LEN, Md5Digest};
pub use error::ParseDigestError;
pub use md5::{digest, hash};

/// Reports whether [`digest_batch`] fans out across threads in this build.
#[must_use]
pub const fn parallel_batches_enabled() -> bool {
    cfg!(feature = "parallel")
}
