//! crates/logging/src/tracing_bridge.rs
//!
//! Installation of the global `tracing` subscriber.
//!
//! Events are rendered by `tracing_subscriber::fmt` to stderr so that digests
//! written to stdout stay machine-readable. The level comes from
//! [`VerbosityConfig`]. Valid directives in [`LOG_ENV_VAR`] replace that level
//! rather than layering on it: targets they do not name are disabled.
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(&VerbosityConfig::from_verbose_level(2));
//! tracing::debug!(target: "md5check::input", bytes = 42, "read input");
//! ```

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::{LOG_ENV_VAR, VerbosityConfig};

/// Builds the event filter for `config`.
///
/// When `directive` holds at least one valid directive the configured level
/// is dropped and only the directives apply, so `md5check::verify=trace`
/// enables that target alone. Unparseable parts are ignored rather than
/// rejected, and the configured level is used when nothing parses.
pub fn build_filter(config: &VerbosityConfig, directive: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(config.verbosity.level_filter().into())
        .parse_lossy(directive.unwrap_or_default())
}

/// Installs the global subscriber.
///
/// Returns `false` when a global subscriber is already installed, which makes
/// repeated calls (for example from tests driving the CLI in-process) harmless.
pub fn init_tracing(config: &VerbosityConfig) -> bool {
    let directive = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(config, directive.as_deref());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(config.show_targets)
        .without_time();

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(
            target: "md5check::logging",
            directive = directive.as_deref().unwrap_or(config.default_directive()),
            "logging initialised"
        );
    }
    installed
}
