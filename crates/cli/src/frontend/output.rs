//! crates/cli/src/frontend/output.rs
//!
//! Rendering of results as plain text or JSON lines.

use std::io::{self, Write};
use std::path::Path;

use checksums::Md5Digest;
use serde::Serialize;

/// Message printed when a verified file matches its reference.
pub(crate) const MATCH_MESSAGE: &str = "File checksum matches!";
/// Message printed when it does not.
pub(crate) const MISMATCH_MESSAGE: &str = "File content is corrupted!";

/// Output encoding selected by `--json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Letter case for plain-text digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexCase {
    /// `d41d8cd9...`
    #[default]
    Lower,
    /// `D41D8CD9...`
    Upper,
}

impl HexCase {
    fn render(self, digest: &Md5Digest) -> String {
        match self {
            Self::Lower => digest.to_hex(),
            Self::Upper => digest.to_upper_hex(),
        }
    }
}

/// Combined output settings.
///
/// JSON always carries the canonical lowercase digest; `case` only affects
/// plain output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rendering {
    /// Plain text or JSON.
    pub format: OutputFormat,
    /// Case for plain-text digests.
    pub case: HexCase,
}

#[derive(Serialize)]
struct HashRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    hash: &'a Md5Digest,
}

#[derive(Serialize)]
struct VerifyRecord<'a> {
    matches: bool,
    message: &'static str,
    computed: &'a Md5Digest,
    expected: &'a str,
}

fn write_json_line<W: Write + ?Sized, T: Serialize>(out: &mut W, record: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")
}

impl Rendering {
    /// Writes the digest of a text operand.
    pub(crate) fn write_text_digest<W: Write + ?Sized>(
        self,
        out: &mut W,
        digest: &Md5Digest,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(out, "{}", self.case.render(digest)),
            OutputFormat::Json => write_json_line(
                out,
                &HashRecord {
                    path: None,
                    hash: digest,
                },
            ),
        }
    }

    /// Writes the digest of a file operand in `md5sum` layout.
    pub(crate) fn write_file_digest<W: Write + ?Sized>(
        self,
        out: &mut W,
        path: &Path,
        digest: &Md5Digest,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => {
                writeln!(out, "{}  {}", self.case.render(digest), path.display())
            }
            OutputFormat::Json => write_json_line(
                out,
                &HashRecord {
                    path: Some(path.display().to_string()),
                    hash: digest,
                },
            ),
        }
    }

    /// Writes a verification verdict.
    pub(crate) fn write_verdict<W: Write + ?Sized>(
        self,
        out: &mut W,
        matches: bool,
        computed: &Md5Digest,
        expected: &str,
    ) -> io::Result<()> {
        let message = if matches {
            MATCH_MESSAGE
        } else {
            MISMATCH_MESSAGE
        };
        tracing::trace!(target: "md5check::output", matches, "rendering verdict");
        match self.format {
            OutputFormat::Plain => writeln!(out, "{message}"),
            OutputFormat::Json => write_json_line(
                out,
                &VerifyRecord {
                    matches,
                    message,
                    computed,
                    expected,
                },
            ),
        }
    }
}
