#![deny(clippy::all, clippy::pedantic)]
//! `model-signing` binary entry point.

use model_signing::cli::{self, write_error};
use model_signing::commands;
use model_signing::signing::UnlinkedBackend;

fn main() {
    let cli = match cli::parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    if let Err(err) = commands::execute(&cli, &UnlinkedBackend) {
        tracing::debug!(error = ?err, "command failed");
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
