#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end for `md5check`. It parses the
//! argument vector with [`clap`](https://docs.rs/clap/), reads text, files or
//! standard input, hashes them with [`checksums`], and prints the digests or a
//! verification verdict.
//!
//! # Design
//!
//! [`run`] is the primary entry point. It accepts an iterator of arguments
//! together with handles for standard output and error so the binary and the
//! tests drive the same code path. [`run_with_input`] additionally takes the
//! reader used for standard input. Three subcommands are recognised:
//!
//! - `text [TEXT]` hashes the UTF-8 bytes of `TEXT`, or standard input when
//!   the operand is omitted.
//! - `file PATH...` hashes each file and prints `md5sum`-style lines. Multiple
//!   operands are digested as one batch, in parallel when the `parallel`
//!   feature is enabled.
//! - `verify PATH (--expected HEX | --hash-file FILE)` compares a file with a
//!   reference digest.
//!
//! Logging is configured through [`logging::init_tracing`] from the `-v`/`-q`
//! flags and the `MD5CHECK_LOG` environment variable. Diagnostics go to
//! stderr and never mix with results on stdout.
//!
//! # Invariants
//!
//! - `run` never panics; I/O failures surface as non-zero exit codes from
//!   [`exit`].
//! - Plain digests are 32 hexadecimal characters, lowercase unless `--upper`
//!   is given. JSON output always carries the lowercase form.
//! - File digests are printed in operand order even when computed in parallel.
//!
//! # Errors
//!
//! Usage errors are rendered by clap and exit with [`exit::USAGE`]. Failures
//! after parsing are described by [`CliError`] and printed as
//! `md5check: <message>`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["md5check", "text", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, cli::exit::SUCCESS);
//! assert_eq!(stdout, b"900150983cd24fb0d6963f7d28e17f72\n");
//! assert!(stderr.is_empty());
//! ```

mod frontend;

pub use frontend::{
    CliError, HexCase, OutputFormat, PROGRAM_NAME, Rendering, TrimPolicy, exit, exit_code_from,
    run, run_with_input,
};
