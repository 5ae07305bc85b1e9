//! crates/logging/src/levels.rs
//! Verbosity levels selected by `-q` and repeated `-v` flags.

use tracing_subscriber::filter::LevelFilter;

/// How much diagnostic output the tool emits on stderr.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Informational events such as verification outcomes.
    Verbose,
    /// Per-input details (paths, byte counts, trimming).
    Debug,
    /// Everything, including output rendering.
    Trace,
}

impl Verbosity {
    /// Maps a `-v` repetition count onto a level; counts above three saturate.
    #[must_use]
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// The `tracing` level filter this verbosity enables.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::ERROR,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// Lowercase name, also accepted by `EnvFilter` directives.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
