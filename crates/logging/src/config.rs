//! crates/logging/src/config.rs
//! Verbosity configuration assembled from command-line flags.

use super::levels::Verbosity;

/// Environment variable whose directives, when valid, replace the flag-derived level.
pub const LOG_ENV_VAR: &str = "MD5CHECK_LOG";

/// Logging configuration for one process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Level derived from `-q`/`-v`.
    pub verbosity: Verbosity,
    /// Include event targets (`md5check::input`, ...) in rendered lines.
    pub show_targets: bool,
}

impl VerbosityConfig {
    /// Create a configuration from a `-v` count.
    pub fn from_verbose_level(level: u8) -> Self {
        let verbosity = Verbosity::from_count(level);
        Self {
            verbosity,
            show_targets: verbosity >= Verbosity::Debug,
        }
    }

    /// Configuration for `-q`: errors only.
    pub fn quiet() -> Self {
        Self {
            verbosity: Verbosity::Quiet,
            show_targets: false,
        }
    }

    /// Filter directive used when [`LOG_ENV_VAR`] is unset; reported when the
    /// subscriber is installed.
    pub fn default_directive(&self) -> &'static str {
        self.verbosity.as_str()
    }
}
