//! crates/cli/src/frontend/error.rs
//!
//! Failures surfaced by the front-end after argument parsing succeeded.

use std::io;
use std::path::PathBuf;

use checksums::ParseDigestError;
use thiserror::Error;

use super::exit;

/// Errors raised while gathering inputs or writing results.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file operand could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Standard input could not be read.
    #[error("failed to read standard input: {0}")]
    Stdin(#[source] io::Error),
    /// Both the verified file and the hash file were `-`.
    #[error("standard input cannot supply both the file to verify and its hash file")]
    StdinReused,
    /// The reference digest was empty.
    #[error("no reference digest found in {origin}")]
    MissingReference {
        /// Where the reference was expected (`--expected` or a hash file path).
        origin: String,
    },
    /// The reference digest was not 32 hex characters.
    #[error("reference digest {reference:?} is malformed: {source}")]
    MalformedReference {
        /// The offending text, after trimming.
        reference: String,
        /// Why it failed to parse.
        #[source]
        source: ParseDigestError,
    },
    /// Results could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Exit status reported for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Output(_) => exit::OUTPUT_FAILURE,
            Self::Read { .. }
            | Self::Stdin(_)
            | Self::StdinReused
            | Self::MissingReference { .. }
            | Self::MalformedReference { .. } => exit::INPUT_FAILURE,
        }
    }
}
