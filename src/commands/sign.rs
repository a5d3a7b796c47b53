/// `sign` command: validate inputs, then hand a signing request to the backend.
use std::io::Write;

use super::inputs::{model_selection, require_all, require_exists, require_optional};
use crate::cli::args::{SignArgs, SignMethod};
use crate::errors::CliError;
use crate::signing::{Secret, SignRequest, SigningBackend, SigningMethod, SigstoreSigning};

/// Run `model-signing sign <method>`.
///
/// # Errors
///
/// Returns `CliError::PathNotFound` for a missing model, key or certificate,
/// or the backend's error unchanged.
pub fn run(
    args: &SignArgs,
    out: &mut dyn Write,
    backend: &dyn SigningBackend,
) -> Result<(), CliError> {
    let request = build_request(&args.method)?;
    tracing::info!(
        method = request.method.name(),
        model = %request.model.model_path.display(),
        "signing model"
    );
    tracing::debug!(?request, "sign request");

    let outcome = backend.sign(&request)?;

    writeln!(
        out,
        "Signing succeeded: signature written to {}",
        outcome.signature.display()
    )?;
    Ok(())
}

/// Translate parsed arguments into a validated [`SignRequest`].
///
/// # Errors
///
/// Returns `CliError::PathNotFound` if any input file is missing.
pub fn build_request(method: &SignMethod) -> Result<SignRequest, CliError> {
    let (common, method) = match method {
        SignMethod::Key {
            common,
            private_key,
            password,
        } => (
            common,
            SigningMethod::Key {
                private_key: require_exists("private key", private_key)?,
                password: password.clone().map(Secret::new),
            },
        ),
        SignMethod::Sigstore {
            common,
            use_ambient_credentials,
            use_staging,
            identity_token,
            oauth_force_oob,
            client_id,
            client_secret,
            trust_config,
        } => (
            common,
            SigningMethod::Sigstore(SigstoreSigning {
                use_ambient_credentials: *use_ambient_credentials,
                use_staging: *use_staging,
                identity_token: identity_token.clone().map(Secret::new),
                oauth_force_oob: *oauth_force_oob,
                client_id: client_id.clone(),
                client_secret: client_secret.clone().map(Secret::new),
                trust_config: require_optional("trust config", trust_config.as_deref())?,
            }),
        ),
        SignMethod::Certificate {
            common,
            private_key,
            signing_certificate,
            certificate_chain,
        } => (
            common,
            SigningMethod::Certificate {
                private_key: require_exists("private key", private_key)?,
                signing_certificate: require_exists("signing certificate", signing_certificate)?,
                certificate_chain: require_all("certificate", certificate_chain)?,
            },
        ),
    };

    Ok(SignRequest {
        model: model_selection(&common.model, &common.signature)?,
        signature: common.signature.clone(),
        method,
    })
}
