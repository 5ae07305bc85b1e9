//! crates/checksums/src/batch.rs
//!
//! Digests for many independent inputs at once.

use crate::digest::Md5Digest;
use crate::md5;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes MD5 digests for multiple inputs.
///
/// Returns digests in the same order as `inputs`. With the `parallel` feature
/// the inputs are spread across the rayon global pool; each digest still owns
/// its entire working state, so the results match sequential computation.
///
/// # Examples
///
/// ```
/// let inputs = [b"a".as_slice(), b"abc"];
/// let digests = checksums::digest_batch(&inputs);
/// assert_eq!(digests[0].to_hex(), "0cc175b9c0f1b6a831c399e269772661");
/// assert_eq!(digests[1], checksums::digest(b"abc"));
/// ```
#[must_use]
pub fn digest_batch<T>(inputs: &[T]) -> Vec<Md5Digest>
where
    T: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        inputs
            .par_iter()
            .map(|input| md5::digest(input.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        inputs
            .iter()
            .map(|input| md5::digest(input.as_ref()))
            .collect()
    }
}
