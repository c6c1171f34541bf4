//! Spawns the delegate tool and mirrors its termination outcome.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitCode, ExitStatus, Stdio};

use crate::errors::{LAUNCH_FAILURE_EXIT, LaunchError};

/// Runs `binary` with the forwarded arguments, blocking until it exits.
///
/// Arguments pass through unmodified and uninspected; stdin, stdout, and
/// stderr are inherited so bytes flow directly between the caller and the
/// child without touching launcher-owned buffers.
pub(crate) fn invoke(binary: &Path, forwarded: &[OsString]) -> Result<ExitCode, LaunchError> {
    let mut command = Command::new(binary);
    command.args(forwarded);
    command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    let mut child = command
        .spawn()
        .map_err(|source| LaunchError::SpawnDelegate {
            binary: binary.to_path_buf(),
            source,
        })?;
    let status = child.wait().map_err(|source| LaunchError::WaitDelegate {
        binary: binary.to_path_buf(),
        source,
    })?;
    Ok(exit_code_from_status(status))
}

/// Maps the child's termination to the launcher's own exit code.
///
/// An ordinary exit code in 0..=255 is mirrored verbatim. On Unix a signal
/// death maps to `128 + signal`, matching shell conventions; anything else
/// collapses to the generic launch-failure status.
pub(crate) fn exit_code_from_status(status: ExitStatus) -> ExitCode {
    ExitCode::from(status_byte(status))
}

pub(crate) fn status_byte(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(LAUNCH_FAILURE_EXIT);
    }
    signal_status_byte(&status).unwrap_or(LAUNCH_FAILURE_EXIT)
}

#[cfg(unix)]
fn signal_status_byte(status: &ExitStatus) -> Option<u8> {
    use std::os::unix::process::ExitStatusExt;

    status
        .signal()
        .and_then(|signal| u8::try_from(signal).ok())
        .map(|signal| 128_u8.saturating_add(signal))
}

#[cfg(not(unix))]
fn signal_status_byte(_status: &ExitStatus) -> Option<u8> {
    None
}
