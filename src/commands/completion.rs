/// `completion` command: emit a shell completion spec for the whole command tree.
use std::io::Write;

use clap_complete::{Shell, generate};
use clap_complete_fig::Fig;

use crate::cli::args::{CompletionArgs, CompletionFormat};
use crate::cli::build_root_command;
use crate::errors::CliError;

/// Run `model-signing completion [FORMAT]`.
///
/// # Errors
///
/// Returns `CliError::Io` if the spec cannot be flushed to the output.
pub fn run(args: &CompletionArgs, out: &mut dyn Write) -> Result<(), CliError> {
    let mut cmd = build_root_command();
    let bin_name = cmd.get_name().to_owned();

    match shell(args.format) {
        Some(shell) => generate(shell, &mut cmd, bin_name, out),
        None => generate(Fig, &mut cmd, bin_name, out),
    }
    out.flush()?;
    Ok(())
}

/// The `clap_complete` shell for `format`, or `None` for Fig.
fn shell(format: CompletionFormat) -> Option<Shell> {
    match format {
        CompletionFormat::Fig => None,
        CompletionFormat::Bash => Some(Shell::Bash),
        CompletionFormat::Zsh => Some(Shell::Zsh),
        CompletionFormat::Fish => Some(Shell::Fish),
        CompletionFormat::Powershell => Some(Shell::PowerShell),
        CompletionFormat::Elvish => Some(Shell::Elvish),
    }
}
