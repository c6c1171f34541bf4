//! Launcher runtime for the `flatt` tool pair.
//!
//! Release archives stage one directory of native binaries per platform next
//! to this launcher. The runtime derives the platform key for the current
//! host, verifies that both the `flatc` and `flatt` binaries exist under the
//! matching directory, and then spawns `flatt` as a child process with the
//! caller's arguments and standard streams passed through untouched. The
//! child's exit status becomes the launcher's own.
//!
//! The module is split so each concern stays small and testable:
//! - [`errors`] captures the error surface and its exit-code mapping.
//! - [`binaries`] computes and verifies the staged binary pair.
//! - [`delegate`] spawns the child and mirrors its termination outcome.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use flatt_platform::{HostPlatform, PlatformKey};

mod binaries;
mod delegate;
mod errors;

pub use errors::LaunchError;

use binaries::BinaryPair;

/// Runs the launcher with the given argument list and diagnostic writer.
///
/// The first argument is the launcher's own invocation name and is dropped;
/// everything after it is forwarded verbatim to the delegate tool. Failures
/// are written to `stderr` as a single line and mapped to the matching exit
/// code; the success path produces no output beyond the inherited streams.
#[must_use]
pub fn run<I, E>(args: I, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    E: Write,
{
    let forwarded: Vec<OsString> = args.into_iter().skip(1).collect();
    let outcome =
        launcher_directory().and_then(|dir| dispatch(&HostPlatform::current(), &dir, &forwarded));
    match outcome {
        Ok(code) => code,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            error.exit_code()
        }
    }
}

/// Resolves the platform key, verifies the staged binary pair under
/// `launcher_dir`, and delegates the invocation to the `flatt` binary.
///
/// Existence is checked exactly once before spawning; a binary removed
/// between the check and the spawn surfaces as a launch failure.
pub fn dispatch(
    platform: &HostPlatform,
    launcher_dir: &Path,
    forwarded: &[OsString],
) -> Result<ExitCode, LaunchError> {
    let key = platform.resolve();
    let pair = BinaryPair::locate(launcher_dir, &key);
    pair.verify(&key)?;
    delegate::invoke(pair.delegate(), forwarded)
}

/// Directory holding the launcher executable; the staged platform
/// directories live directly beneath it.
fn launcher_directory() -> Result<PathBuf, LaunchError> {
    let exe = env::current_exe().map_err(|source| LaunchError::LocateLauncher { source })?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LaunchError::LocateLauncher {
            source: io::Error::new(
                io::ErrorKind::NotFound,
                "launcher path has no parent directory",
            ),
        })
}

#[cfg(test)]
mod tests;
