#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the `md5check` verbosity flags onto a `tracing` subscriber.
//! Library crates emit events with the standard `tracing` macros; this crate
//! decides which of them reach stderr.
//!
//! # Design
//!
//! - [`Verbosity`] is the level picked by `-q` or repeated `-v` flags.
//! - [`VerbosityConfig`] bundles the level with rendering choices.
//! - [`init_tracing`] installs a `fmt` subscriber filtered by an `EnvFilter`
//!   built from the config, overridable through [`LOG_ENV_VAR`].
//!
//! # Invariants
//!
//! - Diagnostics go to stderr only; stdout is reserved for results.
//! - Installing the subscriber twice is not an error.
//!
//! # Examples
//!
//! ```
//! use logging::{Verbosity, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(1);
//! assert_eq!(config.verbosity, Verbosity::Verbose);
//! assert_eq!(config.default_directive(), "info");
//! ```

mod config;
mod levels;
mod tracing_bridge;

pub use config::{LOG_ENV_VAR, VerbosityConfig};
pub use levels::Verbosity;
pub use tracing_bridge::{build_filter, init_tracing};
