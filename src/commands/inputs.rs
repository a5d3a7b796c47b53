/// Input checks shared by `sign` and `verify`.
use std::path::{Path, PathBuf};

use crate::cli::args::ModelArgs;
use crate::errors::CliError;
use crate::signing::ModelSelection;

/// Fail with `CliError::PathNotFound` unless `path` exists.
pub fn require_exists(what: &'static str, path: &Path) -> Result<PathBuf, CliError> {
    if path.exists() {
        Ok(path.to_path_buf())
    } else {
        Err(CliError::PathNotFound {
            what,
            path: path.to_path_buf(),
        })
    }
}

/// Check every path in `paths`.
pub fn require_all(what: &'static str, paths: &[PathBuf]) -> Result<Vec<PathBuf>, CliError> {
    paths.iter().map(|p| require_exists(what, p)).collect()
}

/// Check an optional path.
pub fn require_optional(
    what: &'static str,
    path: Option<&Path>,
) -> Result<Option<PathBuf>, CliError> {
    path.map(|p| require_exists(what, p)).transpose()
}

/// Build the model selection, adding `signature` to the ignore list.
pub fn model_selection(args: &ModelArgs, signature: &Path) -> Result<ModelSelection, CliError> {
    let model_path = require_exists("model", &args.model_path)?;

    let mut ignore_paths = args.ignore_paths.clone();
    if !ignore_paths.iter().any(|p| p == signature) {
        ignore_paths.push(signature.to_path_buf());
    }

    Ok(ModelSelection {
        model_path,
        ignore_paths,
        ignore_git_paths: args.ignores_git_paths(),
        allow_symlinks: args.allow_symlinks,
    })
}
