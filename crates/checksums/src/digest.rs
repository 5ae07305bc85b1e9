//! crates/checksums/src/digest.rs
//!
//! The 128-bit digest value and its hexadecimal renderings.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseDigestError;

/// Length of an MD5 digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// Length of an MD5 digest rendered as hexadecimal.
pub const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

/// A finished MD5 digest.
///
/// The bytes are the registers `A || B || C || D`, each in little-endian
/// order. `Display` and `{:x}` render lowercase hex, `{:X}` uppercase.
/// Parsing accepts either case, so comparisons made through
/// [`matches_hex`](Self::matches_hex) or [`FromStr`] are case-insensitive.
///
/// # Examples
///
/// ```
/// use checksums::Md5Digest;
///
/// let digest = checksums::digest(b"abc");
/// assert_eq!(digest.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
/// assert_eq!(format!("{digest:X}"), "900150983CD24FB0D6963F7D28E17F72");
///
/// let parsed: Md5Digest = "900150983CD24FB0D6963F7D28E17F72".parse()?;
/// assert_eq!(parsed, digest);
/// # Ok::<(), checksums::ParseDigestError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Md5Digest([u8; DIGEST_LEN]);

impl Md5Digest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrows the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 32 lowercase hex characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }

    /// Renders the digest as 32 uppercase hex characters.
    #[must_use]
    pub fn to_upper_hex(&self) -> String {
        format!("{self:X}")
    }

    /// Reports whether `reference` spells this digest in hex, ignoring case.
    ///
    /// Malformed references never match.
    #[must_use]
    pub fn matches_hex(&self, reference: &str) -> bool {
        reference
            .parse::<Self>()
            .is_ok_and(|parsed| parsed == *self)
    }
}

impl From<[u8; DIGEST_LEN]> for Md5Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Md5Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Md5Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Md5Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Md5Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl FromStr for Md5Digest {
    type Err = ParseDigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != DIGEST_HEX_LEN {
            return Err(ParseDigestError::InvalidLength { len });
        }

        let mut bytes = [0_u8; DIGEST_LEN];
        for (index, character) in s.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(ParseDigestError::InvalidCharacter { character, index })?;
            let slot = &mut bytes[index / 2];
            *slot = (*slot << 4) | nibble as u8;
        }
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Md5Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Md5Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
