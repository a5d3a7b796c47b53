//! Logging setup on top of `tracing`.
//!
//! All events go to stderr so they never mix with command output, whether
//! that output is stdout or a file given with `--output-file`.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Tracing target for registry-client events.
///
/// The filter from [`LogLevel::directives`] enables it at debug and turns it
/// off at every other level, so callers emit to it unconditionally.
pub const REGISTRY_TARGET: &str = "model_signing::registry";

/// Minimum severity of emitted log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Verbose output, including registry client diagnostics.
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive string for `EnvFilter`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Full filter directives for this level, including the registry target.
    #[must_use]
    pub fn directives(self) -> String {
        let registry = if self == Self::Debug { "debug" } else { "off" };
        format!("{},{REGISTRY_TARGET}={registry}", self.as_str())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Install the global stderr subscriber for `level`.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one stays in effect.
pub fn activate(level: LogLevel) -> bool {
    let stderr = std::io::stderr();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.directives()))
        .with_writer(std::io::stderr)
        .with_ansi(stderr.is_terminal())
        .try_init()
        .is_ok()
}
