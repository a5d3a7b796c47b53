/// Errors surfaced by the command layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a `model-signing` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// The `--output-file` destination could not be created.
    #[error("error creating output file {}: {source}", path.display())]
    OutputFile {
        /// The requested output path.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },

    /// An input file named on the command line does not exist.
    #[error("{what} not found: {}", path.display())]
    PathNotFound {
        /// What the path was supposed to be (e.g. "model", "private key").
        what: &'static str,
        /// The missing path.
        path: PathBuf,
    },

    /// Writing command output failed.
    #[error("failed to write command output: {0}")]
    Io(#[from] io::Error),

    /// Error reported by the signing backend, passed through unchanged.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Exit code mapping for `CliError` variants.
impl CliError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PathNotFound { .. } => 2,
            Self::OutputFile { .. } | Self::Io(_) | Self::Backend(_) => 1,
        }
    }
}
