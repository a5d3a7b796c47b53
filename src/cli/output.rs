/// Output sink management: optional redirection of command output to a file.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::CliError;

/// Where command output goes for one invocation.
enum Sink {
    Stdout(io::Stdout),
    File { path: PathBuf, writer: BufWriter<File> },
}

/// A RAII guard owning the command output sink.
///
/// Acquired before a subcommand runs and dropped after it returns, on the
/// error path as well. Dropping flushes and closes the redirect file;
/// stdout itself is never swapped, so nothing else needs restoring.
pub struct OutputRedirect {
    sink: Sink,
}

impl OutputRedirect {
    /// Open the sink. `None` keeps output on stdout.
    ///
    /// # Errors
    ///
    /// Returns `CliError::OutputFile` if the file cannot be created or truncated.
    pub fn acquire(target: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = target else {
            return Ok(Self {
                sink: Sink::Stdout(io::stdout()),
            });
        };

        let file = File::create(path).map_err(|source| CliError::OutputFile {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            sink: Sink::File {
                path: path.to_path_buf(),
                writer: BufWriter::new(file),
            },
        })
    }

    /// The writer subcommands print to.
    pub fn writer(&mut self) -> &mut dyn Write {
        match &mut self.sink {
            Sink::Stdout(out) => out,
            Sink::File { writer, .. } => writer,
        }
    }

    /// The redirect file, if output is not going to stdout.
    #[must_use]
    pub fn redirected_to(&self) -> Option<&Path> {
        match &self.sink {
            Sink::Stdout(_) => None,
            Sink::File { path, .. } => Some(path.as_path()),
        }
    }
}

impl Drop for OutputRedirect {
    fn drop(&mut self) {
        // Best effort: close errors cannot be reported from here.
        match &mut self.sink {
            Sink::Stdout(out) => {
                let _ = out.flush();
            }
            Sink::File { path, writer } => {
                let _ = writer.flush();
                tracing::debug!(path = %path.display(), "closed output file");
            }
        }
    }
}

/// Write an error message to stderr.
pub fn write_error(err: &CliError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_target_writes_to_stdout() {
        let redirect = OutputRedirect::acquire(None).unwrap();
        assert!(redirect.redirected_to().is_none());
    }

    #[test]
    fn test_file_receives_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        {
            let mut redirect = OutputRedirect::acquire(Some(&path)).unwrap();
            assert_eq!(redirect.redirected_to(), Some(path.as_path()));
            write!(redirect.writer(), "hello\nworld").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\nworld");
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale content that is long").unwrap();
        {
            let mut redirect = OutputRedirect::acquire(Some(&path)).unwrap();
            redirect.writer().write_all(b"new").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = OutputRedirect::acquire(Some(&path)).err().unwrap();
        assert!(matches!(err, CliError::OutputFile { .. }));
        assert!(err.to_string().contains("out.txt"));
        assert!(!path.exists());
    }
}
