/// Typed requests handed to a [`SigningBackend`](super::SigningBackend).
///
/// These are decoupled from the clap argument structs: every input path
/// has been checked to exist and the signature has been added to the
/// ignore list.
use std::fmt;
use std::path::PathBuf;

use zeroize::Zeroizing;

/// Which files make up the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    /// Model directory or single file.
    pub model_path: PathBuf,
    /// Paths excluded from hashing. Always contains the signature path.
    pub ignore_paths: Vec<PathBuf>,
    /// Exclude `.git`, `.gitignore` and friends.
    pub ignore_git_paths: bool,
    /// Follow symbolic links.
    pub allow_symlinks: bool,
}

/// A password or token that must not end up in logs.
///
/// The buffer is wiped when the last copy is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Zeroizing<String>);

impl Secret {
    #[must_use]
    pub fn new(value: String) -> Self {
        Self(Zeroizing::new(value))
    }

    /// The secret value, for handing to the backend.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Sigstore signing options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SigstoreSigning {
    pub use_ambient_credentials: bool,
    pub use_staging: bool,
    pub identity_token: Option<Secret>,
    pub oauth_force_oob: bool,
    pub client_id: Option<String>,
    pub client_secret: Option<Secret>,
    pub trust_config: Option<PathBuf>,
}

/// PKI material used to produce a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningMethod {
    Key {
        private_key: PathBuf,
        password: Option<Secret>,
    },
    Sigstore(SigstoreSigning),
    Certificate {
        private_key: PathBuf,
        signing_certificate: PathBuf,
        certificate_chain: Vec<PathBuf>,
    },
}

impl SigningMethod {
    /// Short method name, matching the subcommand.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Key { .. } => "key",
            Self::Sigstore(_) => "sigstore",
            Self::Certificate { .. } => "certificate",
        }
    }
}

/// Everything needed to sign a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignRequest {
    pub model: ModelSelection,
    /// Output path of the signature.
    pub signature: PathBuf,
    pub method: SigningMethod,
}

/// PKI material used to check a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationMethod {
    Key {
        public_key: PathBuf,
    },
    Sigstore {
        identity: String,
        identity_provider: String,
        use_staging: bool,
        trust_config: Option<PathBuf>,
    },
    Certificate {
        certificate_chain: Vec<PathBuf>,
        log_fingerprints: bool,
    },
}

impl VerificationMethod {
    /// Short method name, matching the subcommand.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Key { .. } => "key",
            Self::Sigstore { .. } => "sigstore",
            Self::Certificate { .. } => "certificate",
        }
    }
}

/// Everything needed to verify a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub model: ModelSelection,
    /// Existing signature to check.
    pub signature: PathBuf,
    pub method: VerificationMethod,
    /// Tolerate model files the signature does not cover.
    pub ignore_unsigned_files: bool,
}
