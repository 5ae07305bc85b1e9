//! crates/cli/src/frontend/exit.rs
//!
//! Process exit statuses reported by `md5check`.

/// Every requested digest was produced, or verification matched.
pub const SUCCESS: i32 = 0;
/// Verification completed and the digests differ.
pub const MISMATCH: i32 = 1;
/// The command line could not be parsed. Matches clap's own usage status.
pub const USAGE: i32 = 2;
/// An input file, standard input, or the reference digest was unusable.
pub const INPUT_FAILURE: i32 = 3;
/// Results could not be written to standard output.
pub const OUTPUT_FAILURE: i32 = 4;

/// Largest status the operating system preserves.
pub(crate) const MAX_EXIT_CODE: i32 = u8::MAX as i32;
