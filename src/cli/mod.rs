/// CLI layer: argument parsing, flag normalization, usage layout and output sinks.
pub mod args;
pub mod normalize;
pub mod output;
pub mod templates;

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};

pub use args::{Cli, Command, RootOptions};
pub use normalize::normalize_args;
pub use output::{OutputRedirect, write_error};

/// Build the full `model-signing` command tree.
///
/// Performs no I/O. The four subcommands are registered in the order
/// `sign`, `verify`, `version`, `completion`.
#[must_use]
pub fn build_root_command() -> clap::Command {
    templates::set_custom_usage(Cli::command())
}

/// Normalize `args` and parse them against the root command.
///
/// # Errors
///
/// Returns the clap error for unknown flags, missing values, `--help` and the like.
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = build_root_command();
    let matches = cmd.try_get_matches_from_mut(normalize_args(args))?;
    Cli::from_arg_matches(&matches).map_err(|err| err.format(&mut cmd))
}
