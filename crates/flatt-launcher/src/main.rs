//! Binary entry point for the `flatt` launcher.
//!
//! The binary delegates to [`flatt_launcher::run`], which resolves the host
//! platform key, verifies the staged `flatc`/`flatt` binary pair beside the
//! launcher, and hands the invocation over to the native `flatt` tool with
//! inherited standard streams.

use std::io::{self, StderrLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    flatt_launcher::run(std::env::args_os(), &mut stderr)
}
