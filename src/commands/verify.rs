/// `verify` command: validate inputs, then hand a verification request to the backend.
use std::io::Write;

use super::inputs::{model_selection, require_all, require_exists, require_optional};
use crate::cli::args::{VerifyArgs, VerifyMethod};
use crate::errors::CliError;
use crate::signing::{SigningBackend, VerificationMethod, VerifyRequest};

/// Run `model-signing verify <method>`.
///
/// # Errors
///
/// Returns `CliError::PathNotFound` for a missing model, signature, key or
/// certificate, or the backend's error unchanged.
pub fn run(
    args: &VerifyArgs,
    out: &mut dyn Write,
    backend: &dyn SigningBackend,
) -> Result<(), CliError> {
    let request = build_request(&args.method)?;
    tracing::info!(
        method = request.method.name(),
        model = %request.model.model_path.display(),
        signature = %request.signature.display(),
        "verifying model"
    );
    tracing::debug!(?request, "verify request");

    let outcome = backend.verify(&request)?;

    match outcome.subject {
        Some(subject) => writeln!(out, "Verification succeeded for {subject}")?,
        None => writeln!(out, "Verification succeeded")?,
    }
    Ok(())
}

/// Translate parsed arguments into a validated [`VerifyRequest`].
///
/// # Errors
///
/// Returns `CliError::PathNotFound` if any input file is missing.
pub fn build_request(method: &VerifyMethod) -> Result<VerifyRequest, CliError> {
    let (common, method) = match method {
        VerifyMethod::Key { common, public_key } => (
            common,
            VerificationMethod::Key {
                public_key: require_exists("public key", public_key)?,
            },
        ),
        VerifyMethod::Sigstore {
            common,
            identity,
            identity_provider,
            use_staging,
            trust_config,
        } => (
            common,
            VerificationMethod::Sigstore {
                identity: identity.clone(),
                identity_provider: identity_provider.clone(),
                use_staging: *use_staging,
                trust_config: require_optional("trust config", trust_config.as_deref())?,
            },
        ),
        VerifyMethod::Certificate {
            common,
            certificate_chain,
            log_fingerprints,
        } => (
            common,
            VerificationMethod::Certificate {
                certificate_chain: require_all("certificate", certificate_chain)?,
                log_fingerprints: *log_fingerprints,
            },
        ),
    };

    let signature = require_exists("signature", &common.signature)?;

    Ok(VerifyRequest {
        model: model_selection(&common.model, &signature)?,
        signature,
        method,
        ignore_unsigned_files: common.ignore_unsigned_files,
    })
}
