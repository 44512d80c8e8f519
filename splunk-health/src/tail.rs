use std::{ffi::OsStr, io, path::Path, process::Command};

use tracing::debug;

use crate::error::CheckError;

/// Runs `<program> -n <count> <path>` and returns the output lines.
///
/// The whole output is trimmed before splitting, so a trailing newline
/// never yields an empty last line.
pub fn tail_lines(
    program: impl AsRef<OsStr>,
    count: usize,
    path: &Path,
) -> Result<Vec<String>, CheckError> {
    let output = Command::new(program.as_ref())
        .arg("-n")
        .arg(count.to_string())
        .arg(path)
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CheckError::TailNotFound,
            _ => CheckError::TailIo(e),
        })?;

    if !output.status.success() {
        return Err(CheckError::TailFailed {
            stderr: single_line(&String::from_utf8_lossy(&output.stderr)),
        });
    }

    let lines = split_output(&String::from_utf8_lossy(&output.stdout));
    debug!(count = lines.len(), path = %path.display(), "tailed log");
    Ok(lines)
}

fn split_output(stdout: &str) -> Vec<String> {
    stdout.trim().split('\n').map(str::to_owned).collect()
}

// Line breaks become a literal backslash-n so the report stays on one line.
fn single_line(stderr: &str) -> String {
    stderr.trim_end().lines().collect::<Vec<_>>().join("\\n")
}
