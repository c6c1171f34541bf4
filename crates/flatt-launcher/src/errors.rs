//! Error surface for the launcher runtime.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

/// Exit status when no binary pair is staged for the resolved platform.
/// Follows the shell "command not found" convention.
pub(crate) const MISSING_BINARIES_EXIT: u8 = 127;

/// Exit status for launch-level failures (self-location, spawn, wait).
/// Follows the shell "cannot execute" convention, keeping it distinct from
/// the missing-binary case and from ordinary delegate exit codes in the
/// common range.
pub(crate) const LAUNCH_FAILURE_EXIT: u8 = 126;

/// Errors raised while resolving and delegating an invocation.
///
/// The delegate's own non-zero exit is not an error; it is mirrored as the
/// launcher's exit code by the delegation path.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The staged layout has no binary pair for the resolved platform key.
    #[error("no flatt binaries are available for platform {platform}")]
    UnsupportedPlatform {
        /// The `{os-family}-{arch}` identifier that failed to resolve.
        platform: String,
    },
    /// The launcher could not determine its own on-disk location.
    #[error("failed to locate the launcher executable: {source}")]
    LocateLauncher {
        /// Underlying `current_exe` failure.
        #[source]
        source: io::Error,
    },
    /// The delegate binary existed at check time but could not be started.
    #[error("failed to spawn delegate binary {binary:?}: {source}")]
    SpawnDelegate {
        /// Path of the binary that failed to start.
        binary: PathBuf,
        /// Underlying spawn failure.
        #[source]
        source: io::Error,
    },
    /// Waiting on the running delegate failed.
    #[error("failed to wait for delegate binary {binary:?}: {source}")]
    WaitDelegate {
        /// Path of the binary being waited on.
        binary: PathBuf,
        /// Underlying wait failure.
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Exit status the launcher terminates with for this error.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub(crate) const fn exit_status(&self) -> u8 {
        match self {
            Self::UnsupportedPlatform { .. } => MISSING_BINARIES_EXIT,
            Self::LocateLauncher { .. } | Self::SpawnDelegate { .. } | Self::WaitDelegate { .. } => {
                LAUNCH_FAILURE_EXIT
            }
        }
    }
}
