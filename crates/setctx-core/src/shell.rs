//! Captured invocation of external CLIs (gcloud, conda).
//!
//! These are the read-only list queries the tool runs itself; everything
//! mutating is emitted as script for the caller's shell instead.

use crate::error::{Result, SetctxError};
use std::process::{Command, Stdio};

/// Run `program args...`, wait, and return captured stdout. Any failure mode
/// (missing binary, non-zero exit, non-UTF-8 output) maps to `CommandFailed`
/// carrying the full command line and whatever detail is available.
pub fn capture(program: &str, args: &[&str]) -> Result<String> {
    let command_line = format!("{program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            let detail = if which::which(program).is_err() {
                format!("'{program}' not found on PATH")
            } else {
                e.to_string()
            };
            SetctxError::CommandFailed {
                command: command_line.clone(),
                detail,
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SetctxError::CommandFailed {
            command: command_line,
            detail: format!(
                "exit status {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            ),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| SetctxError::CommandFailed {
        command: command_line,
        detail: "stdout was not valid UTF-8".to_string(),
    })
}
