/// Serializable output types.
///
/// These are what `--json` output is built from, decoupled from how the text
/// rendering lays them out.
use serde::{Deserialize, Serialize};

/// Fallback for build metadata that was not provided at compile time.
const UNKNOWN: &str = "unknown";

/// Build and version metadata reported by `model-signing version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Crate version (e.g., "0.1.0").
    pub git_version: String,
    /// Commit the binary was built from.
    pub git_commit: String,
    /// "clean" or "dirty".
    pub git_tree_state: String,
    /// RFC 3339 build timestamp.
    pub build_date: String,
    /// `rustc --version` of the toolchain used.
    pub rust_version: String,
    pub compiler: String,
    /// `<os>/<arch>`, e.g. "linux/x86_64".
    pub platform: String,
}

impl VersionInfo {
    /// Metadata for the running binary.
    ///
    /// Git and build fields come from `MODEL_SIGNING_GIT_COMMIT`,
    /// `MODEL_SIGNING_GIT_TREE_STATE`, `MODEL_SIGNING_BUILD_DATE` and
    /// `MODEL_SIGNING_RUSTC_VERSION` at compile time.
    #[must_use]
    pub fn current() -> Self {
        Self {
            git_version: env!("CARGO_PKG_VERSION").to_owned(),
            git_commit: option_env!("MODEL_SIGNING_GIT_COMMIT")
                .unwrap_or(UNKNOWN)
                .to_owned(),
            git_tree_state: option_env!("MODEL_SIGNING_GIT_TREE_STATE")
                .unwrap_or(UNKNOWN)
                .to_owned(),
            build_date: option_env!("MODEL_SIGNING_BUILD_DATE")
                .unwrap_or(UNKNOWN)
                .to_owned(),
            rust_version: option_env!("MODEL_SIGNING_RUSTC_VERSION")
                .unwrap_or(UNKNOWN)
                .to_owned(),
            compiler: "rustc".to_owned(),
            platform: format!("{}/{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    /// Label/value pairs in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 7] {
        [
            ("GitVersion:", self.git_version.as_str()),
            ("GitCommit:", self.git_commit.as_str()),
            ("GitTreeState:", self.git_tree_state.as_str()),
            ("BuildDate:", self.build_date.as_str()),
            ("RustVersion:", self.rust_version.as_str()),
            ("Compiler:", self.compiler.as_str()),
            ("Platform:", self.platform.as_str()),
        ]
    }
}
