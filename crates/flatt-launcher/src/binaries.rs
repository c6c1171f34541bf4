//! Locates the per-platform tool binaries staged beside the launcher.
//!
//! The staged layout is produced by an external packaging step and is a
//! read-only contract here: `{launcher_dir}/{platform-id}/{tool}{suffix}`
//! for exactly the two tool names below.

use std::path::{Path, PathBuf};

use flatt_platform::PlatformKey;

use crate::errors::LaunchError;

/// Companion tool whose presence is verified but which is never invoked.
pub(crate) const VERIFIER_TOOL: &str = "flatc";

/// Tool the invocation is delegated to.
pub(crate) const DELEGATE_TOOL: &str = "flatt";

/// Candidate paths of the staged tool pair for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BinaryPair {
    verifier: PathBuf,
    delegate: PathBuf,
}

impl BinaryPair {
    /// Computes both candidate paths under `{launcher_dir}/{key.id}/`.
    pub(crate) fn locate(launcher_dir: &Path, key: &PlatformKey) -> Self {
        let variant_dir = launcher_dir.join(key.id());
        Self {
            verifier: variant_dir.join(key.executable_name(VERIFIER_TOOL)),
            delegate: variant_dir.join(key.executable_name(DELEGATE_TOOL)),
        }
    }

    /// Fails with [`LaunchError::UnsupportedPlatform`] unless both tools are
    /// on disk. Checked once; the paths are not re-validated afterwards.
    pub(crate) fn verify(&self, key: &PlatformKey) -> Result<(), LaunchError> {
        if self.verifier.exists() && self.delegate.exists() {
            Ok(())
        } else {
            Err(LaunchError::UnsupportedPlatform {
                platform: key.id().to_owned(),
            })
        }
    }

    pub(crate) fn delegate(&self) -> &Path {
        &self.delegate
    }

    #[cfg(test)]
    pub(crate) fn verifier(&self) -> &Path {
        &self.verifier
    }
}
