//! crates/cli/src/frontend/input.rs
//!
//! Reading operands and applying the whitespace policy before hashing.

use std::fs;
use std::io::Read;
use std::path::Path;

use super::error::CliError;

/// Operand spelling that selects standard input.
pub(crate) const STDIN_OPERAND: &str = "-";

/// Whether leading and trailing whitespace is stripped before hashing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrimPolicy {
    /// Hash the bytes exactly as read.
    #[default]
    Keep,
    /// Strip surrounding whitespace first.
    ///
    /// UTF-8 data loses Unicode whitespace and any byte-order mark
    /// (U+FEFF); anything else loses ASCII whitespace only. Interior bytes
    /// are never rewritten.
    Whitespace,
}

impl TrimPolicy {
    /// Picks `Whitespace` when `trim` is set.
    #[must_use]
    pub const fn from_flag(trim: bool) -> Self {
        if trim { Self::Whitespace } else { Self::Keep }
    }

    /// Returns the slice of `data` that should be hashed.
    #[must_use]
    pub fn apply(self, data: &[u8]) -> &[u8] {
        match self {
            Self::Keep => data,
            Self::Whitespace => match std::str::from_utf8(data) {
                Ok(text) => text.trim_matches(is_trimmed_char).as_bytes(),
                Err(_) => data.trim_ascii(),
            },
        }
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_trimmed_char(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Reads a whole file, or standard input for `-`.
pub(crate) fn read_operand<R: Read>(path: &Path, stdin: &mut R) -> Result<Vec<u8>, CliError> {
    if path.as_os_str() == STDIN_OPERAND {
        return read_stdin(stdin);
    }

    let data = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        target: "md5check::input",
        path = %path.display(),
        bytes = data.len(),
        "read file"
    );
    Ok(data)
}

/// Reads standard input to the end.
pub(crate) fn read_stdin<R: Read>(stdin: &mut R) -> Result<Vec<u8>, CliError> {
    let mut data = Vec::new();
    stdin.read_to_end(&mut data).map_err(CliError::Stdin)?;
    tracing::debug!(target: "md5check::input", bytes = data.len(), "read standard input");
    Ok(data)
}

/// Applies `policy`, logging how much was removed.
pub(crate) fn prepare(data: &[u8], policy: TrimPolicy) -> &[u8] {
    let prepared = policy.apply(data);
    if prepared.len() != data.len() {
        tracing::trace!(
            target: "md5check::input",
            removed = data.len() - prepared.len(),
            "trimmed surrounding whitespace"
        );
    }
    prepared
}
