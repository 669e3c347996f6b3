//! Child process runner for the external bundler and renderer.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Captured result of a finished child process
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// stdout followed by stderr, for diagnostics
    pub fn combined(&self) -> String {
        let mut text = String::new();
        for part in [self.stdout.trim_end(), self.stderr.trim_end()] {
            if part.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(part);
        }
        if text.is_empty() {
            text = format!("process exited with {}", self.status);
        }
        text
    }
}

/// Run `program` to completion in `cwd`, capturing its output.
///
/// stdin is closed so a tool waiting for input fails instead of hanging.
pub fn run(
    program: &str,
    args: &[OsString],
    cwd: &Path,
    envs: &[(&str, OsString)],
) -> io::Result<ProcessOutput> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output()?;
    Ok(ProcessOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
