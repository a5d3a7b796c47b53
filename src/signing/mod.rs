/// Seam between the CLI and the signing/verification implementation.
///
/// The CLI builds validated requests and hands them to a [`SigningBackend`];
/// hashing, manifests and PKI operations all live behind this trait.
pub mod request;

use std::path::PathBuf;

pub use request::{
    ModelSelection, Secret, SignRequest, SigningMethod, SigstoreSigning, VerificationMethod,
    VerifyRequest,
};

/// Result of a successful signing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignOutcome {
    /// Where the signature was written.
    pub signature: PathBuf,
}

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerifyOutcome {
    /// The verified signer identity, when the method has one.
    pub subject: Option<String>,
}

/// Performs the actual signing and verification.
pub trait SigningBackend {
    /// Sign the selected model and write the signature.
    ///
    /// # Errors
    ///
    /// Any backend failure; it is reported to the user unchanged.
    fn sign(&self, request: &SignRequest) -> anyhow::Result<SignOutcome>;

    /// Verify the selected model against its signature.
    ///
    /// # Errors
    ///
    /// Any backend failure, including a signature that does not verify.
    fn verify(&self, request: &VerifyRequest) -> anyhow::Result<VerifyOutcome>;
}

/// Backend used when no signing implementation is linked into the binary.
///
/// Every operation fails with a message naming the requested method.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlinkedBackend;

impl SigningBackend for UnlinkedBackend {
    fn sign(&self, request: &SignRequest) -> anyhow::Result<SignOutcome> {
        anyhow::bail!(
            "cannot sign with method '{}': no signing backend is linked into this build",
            request.method.name()
        )
    }

    fn verify(&self, request: &VerifyRequest) -> anyhow::Result<VerifyOutcome> {
        anyhow::bail!(
            "cannot verify with method '{}': no signing backend is linked into this build",
            request.method.name()
        )
    }
}
