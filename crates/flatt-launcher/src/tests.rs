//! Unit tests for binary-pair location, verification, and status mapping.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rstest::rstest;

use crate::binaries::BinaryPair;
use crate::errors::{LAUNCH_FAILURE_EXIT, MISSING_BINARIES_EXIT};
use crate::{HostPlatform, LaunchError, dispatch};

#[test]
fn locate_builds_windows_paths_with_suffix() {
    let key = HostPlatform::new("win32", "x64").resolve();
    let pair = BinaryPair::locate(Path::new("/opt/flatt"), &key);
    assert_eq!(pair.verifier(), Path::new("/opt/flatt/win-x64/flatc.exe"));
    assert_eq!(pair.delegate(), Path::new("/opt/flatt/win-x64/flatt.exe"));
}

#[test]
fn locate_builds_unix_paths_without_suffix() {
    let key = HostPlatform::new("linux5", "x64").resolve();
    let pair = BinaryPair::locate(Path::new("/opt/flatt"), &key);
    assert_eq!(pair.verifier(), Path::new("/opt/flatt/linux-x64/flatc"));
    assert_eq!(pair.delegate(), Path::new("/opt/flatt/linux-x64/flatt"));
}

#[test]
fn dispatch_fails_when_layout_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let platform = HostPlatform::new("linux", "x64");
    let error = dispatch(&platform, dir.path(), &[]).expect_err("missing pair");
    match error {
        LaunchError::UnsupportedPlatform { platform: id } => assert_eq!(id, "linux-x64"),
        other => panic!("expected UnsupportedPlatform, got: {other:?}"),
    }
}

#[test]
fn dispatch_requires_both_tools() {
    let dir = tempfile::tempdir().expect("tempdir");
    let variant_dir = dir.path().join("linux-x64");
    fs::create_dir(&variant_dir).expect("variant dir");
    fs::write(variant_dir.join("flatt"), b"").expect("stage delegate only");
    let platform = HostPlatform::new("linux", "x64");
    let error = dispatch(&platform, dir.path(), &[]).expect_err("verifier missing");
    assert!(matches!(error, LaunchError::UnsupportedPlatform { .. }));
}

#[rstest]
#[case::unsupported_platform(
    LaunchError::UnsupportedPlatform {
        platform: String::from("linux-x64"),
    },
    MISSING_BINARIES_EXIT
)]
#[case::spawn_failure(
    LaunchError::SpawnDelegate {
        binary: PathBuf::from("/opt/flatt/linux-x64/flatt"),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    },
    LAUNCH_FAILURE_EXIT
)]
#[case::locate_failure(
    LaunchError::LocateLauncher {
        source: io::Error::from(io::ErrorKind::NotFound),
    },
    LAUNCH_FAILURE_EXIT
)]
fn errors_map_to_distinct_exit_codes(#[case] error: LaunchError, #[case] expected: u8) {
    assert_eq!(error.exit_status(), expected);
}

#[test]
fn unsupported_platform_message_names_the_id() {
    let error = LaunchError::UnsupportedPlatform {
        platform: String::from("freebsd-amd64"),
    };
    assert_eq!(
        error.to_string(),
        "no flatt binaries are available for platform freebsd-amd64"
    );
}

#[cfg(unix)]
#[rstest]
#[case::clean_exit(0, 0)]
#[case::seventeen(17 << 8, 17)]
#[case::max_code(255 << 8, 255)]
#[case::sigkill(9, 137)]
#[case::sigterm(15, 143)]
fn exit_code_mirrors_wait_status(#[case] raw: i32, #[case] expected: u8) {
    use std::os::unix::process::ExitStatusExt;
    let status = std::process::ExitStatus::from_raw(raw);
    assert_eq!(crate::delegate::status_byte(status), expected);
}

#[test]
fn run_emits_single_diagnostic_when_pair_is_missing() {
    // The test binary's own directory carries no staged platform layout, so
    // the run must fail the existence check before spawning anything.
    let mut stderr = Vec::new();
    let exit = crate::run(vec![OsString::from("flatt")], &mut stderr);
    assert_eq!(exit, ExitCode::from(MISSING_BINARIES_EXIT));
    let text = String::from_utf8(stderr).expect("stderr utf8");
    assert_eq!(text.lines().count(), 1, "expected exactly one diagnostic");
    assert!(text.contains(HostPlatform::current().resolve().id()));
}
