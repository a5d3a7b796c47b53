/// CLI argument definitions via clap derive.
use std::convert::Infallible;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::logging::LogLevel;

/// Help heading shared by every flag declared on [`RootOptions`].
const GLOBAL_HEADING: &str = "Global Options";

/// model-signing — ML model signing and verification.
#[derive(Debug, Parser)]
#[command(
    name = "model-signing",
    about = "ML model signing and verification.",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(flatten)]
    pub root: RootOptions,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by the whole command tree.
///
/// Every flag is `global`, so it is accepted before or after any subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct RootOptions {
    /// Write command output to this file instead of stdout.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        value_parser = output_path,
        help_heading = GLOBAL_HEADING
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity. `debug` also routes registry client logs to stderr.
    #[arg(
        long,
        global = true,
        value_enum,
        value_name = "LEVEL",
        default_value_t = LogLevel::Info,
        help_heading = GLOBAL_HEADING
    )]
    pub log_level: LogLevel,
}

impl RootOptions {
    /// The output file to redirect to, if any. An empty path means stdout.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output_file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }
}

/// Accepts any path, including the empty one (which means stdout).
fn output_path(value: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

/// All subcommands, in the order they are registered on the root.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign a model.
    Sign(SignArgs),
    /// Verify a model signature.
    Verify(VerifyArgs),
    /// Print build and version information.
    Version(VersionArgs),
    /// Generate a shell completion spec (Fig by default).
    Completion(CompletionArgs),
}

/// Model selection flags shared by `sign` and `verify`.
#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    /// Path to the model directory or file.
    #[arg(value_name = "MODEL_PATH")]
    pub model_path: PathBuf,

    /// Paths to exclude from the model. Repeatable or comma-separated.
    #[arg(
        long,
        value_name = "PATH",
        num_args = 1,
        action = ArgAction::Append,
        value_delimiter = ','
    )]
    pub ignore_paths: Vec<PathBuf>,

    /// Exclude git-related files from the model (default).
    #[arg(long, overrides_with = "no_ignore_git_paths")]
    pub ignore_git_paths: bool,

    /// Include git-related files in the model.
    #[arg(long, overrides_with = "ignore_git_paths")]
    pub no_ignore_git_paths: bool,

    /// Follow symbolic links inside the model.
    #[arg(long)]
    pub allow_symlinks: bool,
}

impl ModelArgs {
    /// Whether git-related files are excluded. Defaults to true.
    #[must_use]
    pub fn ignores_git_paths(&self) -> bool {
        self.ignore_git_paths || !self.no_ignore_git_paths
    }
}

/// Arguments for `model-signing sign`.
#[derive(Debug, Args)]
pub struct SignArgs {
    #[command(subcommand)]
    pub method: SignMethod,
}

/// Flags shared by every `sign` method.
#[derive(Debug, Clone, Args)]
pub struct SignCommonArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Where to write the signature.
    #[arg(long, value_name = "PATH", default_value = "model.sig")]
    pub signature: PathBuf,
}

/// PKI methods for `sign`.
#[derive(Debug, Subcommand)]
pub enum SignMethod {
    /// Sign with a private key.
    Key {
        #[command(flatten)]
        common: SignCommonArgs,

        /// Path to the PEM-encoded private key.
        #[arg(long, value_name = "PATH")]
        private_key: PathBuf,

        /// Password for an encrypted private key.
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign with Sigstore (keyless, OIDC identity).
    Sigstore {
        #[command(flatten)]
        common: SignCommonArgs,

        /// Use credentials from the ambient environment (CI workload identity).
        #[arg(long, conflicts_with = "identity_token")]
        use_ambient_credentials: bool,

        /// Use the Sigstore staging instance.
        #[arg(long)]
        use_staging: bool,

        /// Fixed OIDC identity token to sign with.
        #[arg(long, value_name = "TOKEN")]
        identity_token: Option<String>,

        /// Force an out-of-band OAuth flow.
        #[arg(long)]
        oauth_force_oob: bool,

        /// Custom OpenID Connect client ID.
        #[arg(long)]
        client_id: Option<String>,

        /// Custom OpenID Connect client secret.
        #[arg(long, requires = "client_id")]
        client_secret: Option<String>,

        /// Path to a Sigstore trust configuration.
        #[arg(long, value_name = "PATH")]
        trust_config: Option<PathBuf>,
    },
    /// Sign with a private key and its certificate chain.
    Certificate {
        #[command(flatten)]
        common: SignCommonArgs,

        /// Path to the PEM-encoded private key.
        #[arg(long, value_name = "PATH")]
        private_key: PathBuf,

        /// Path to the signing certificate.
        #[arg(long, value_name = "PATH")]
        signing_certificate: PathBuf,

        /// Certificates forming the chain of trust. Repeatable or comma-separated.
        #[arg(
            long,
            value_name = "PATH",
            num_args = 1,
            action = ArgAction::Append,
            value_delimiter = ','
        )]
        certificate_chain: Vec<PathBuf>,
    },
}

/// Arguments for `model-signing verify`.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(subcommand)]
    pub method: VerifyMethod,
}

/// Flags shared by every `verify` method.
#[derive(Debug, Clone, Args)]
pub struct VerifyCommonArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// The signature to verify.
    #[arg(long, value_name = "PATH")]
    pub signature: PathBuf,

    /// Do not fail on files present in the model but absent from the signature.
    #[arg(long)]
    pub ignore_unsigned_files: bool,
}

/// PKI methods for `verify`.
#[derive(Debug, Subcommand)]
pub enum VerifyMethod {
    /// Verify with a public key.
    Key {
        #[command(flatten)]
        common: VerifyCommonArgs,

        /// Path to the PEM-encoded public key.
        #[arg(long, value_name = "PATH")]
        public_key: PathBuf,
    },
    /// Verify a Sigstore signature against an expected identity.
    Sigstore {
        #[command(flatten)]
        common: VerifyCommonArgs,

        /// Expected signer identity (e.g. an email or workflow URI).
        #[arg(long)]
        identity: String,

        /// Expected OIDC issuer of the identity.
        #[arg(long, value_name = "URL")]
        identity_provider: String,

        /// Use the Sigstore staging instance.
        #[arg(long)]
        use_staging: bool,

        /// Path to a Sigstore trust configuration.
        #[arg(long, value_name = "PATH")]
        trust_config: Option<PathBuf>,
    },
    /// Verify against a certificate chain.
    Certificate {
        #[command(flatten)]
        common: VerifyCommonArgs,

        /// Certificates forming the chain of trust. Repeatable or comma-separated.
        #[arg(
            long,
            value_name = "PATH",
            num_args = 1,
            action = ArgAction::Append,
            value_delimiter = ','
        )]
        certificate_chain: Vec<PathBuf>,

        /// Log the fingerprints of the certificates used.
        #[arg(long)]
        log_fingerprints: bool,
    },
}

/// Arguments for `model-signing version`.
#[derive(Debug, Parser)]
pub struct VersionArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `model-signing completion`.
#[derive(Debug, Parser)]
pub struct CompletionArgs {
    /// Completion format to generate.
    #[arg(value_enum, default_value_t = CompletionFormat::Fig)]
    pub format: CompletionFormat,
}

/// Completion output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CompletionFormat {
    /// Fig autocomplete spec (TypeScript).
    #[default]
    Fig,
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}
