/// Command execution: the pre-run/post-run wrapper and subcommand dispatch.
pub mod completion;
pub mod inputs;
pub mod sign;
pub mod verify;
pub mod version;

use std::io::Write;

use crate::cli::{Cli, Command, OutputRedirect, RootOptions, build_root_command};
use crate::errors::CliError;
use crate::logging::{self, REGISTRY_TARGET};
use crate::signing::SigningBackend;
use self::version::BannerFont;

/// Banner style used by the `version` subcommand.
const VERSION_FONT: BannerFont = BannerFont::StarWars;

/// Run the parsed command line.
///
/// # Errors
///
/// Returns `CliError` if the output file cannot be created or the selected
/// subcommand fails.
pub fn execute(cli: &Cli, backend: &dyn SigningBackend) -> Result<(), CliError> {
    with_output(&cli.root, |out| match &cli.command {
        Some(command) => dispatch(command, out, backend),
        None => write_root_help(out),
    })
}

/// A bare `model-signing` prints the root help and succeeds.
fn write_root_help(out: &mut dyn Write) -> Result<(), CliError> {
    write!(out, "{}", build_root_command().render_help())?;
    Ok(())
}

/// Wrap one subcommand run with the root's setup and teardown.
///
/// Before `run`: logging is activated for the selected level and, when an
/// output file is set, it is created and becomes the sink. If it cannot be
/// created, `run` is never called. After `run`: the sink is flushed and the
/// file closed, whether `run` succeeded or not.
///
/// # Errors
///
/// Returns `CliError::OutputFile`, the error from `run`, or `CliError::Io`
/// if buffered output could not be flushed.
pub fn with_output<T>(
    root: &RootOptions,
    run: impl FnOnce(&mut dyn Write) -> Result<T, CliError>,
) -> Result<T, CliError> {
    logging::activate(root.log_level());

    let mut redirect = OutputRedirect::acquire(root.output_path())?;
    if let Some(path) = redirect.redirected_to() {
        tracing::debug!(path = %path.display(), "redirecting command output");
    }
    tracing::debug!(target: REGISTRY_TARGET, "registry client debug logs routed to stderr");

    let value = run(redirect.writer())?;
    redirect.writer().flush()?;
    Ok(value)
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns the handler's `CliError`.
pub fn dispatch(
    command: &Command,
    out: &mut dyn Write,
    backend: &dyn SigningBackend,
) -> Result<(), CliError> {
    match command {
        Command::Sign(args) => sign::run(args, out, backend),
        Command::Verify(args) => verify::run(args, out, backend),
        Command::Version(args) => version::run(args, VERSION_FONT, out),
        Command::Completion(args) => completion::run(args, out),
    }
}
