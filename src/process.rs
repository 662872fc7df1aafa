//! External process execution.
//!
//! Every tool the pipeline drives (pip, PyInstaller) goes through this
//! module so spawn failures, exit codes, and captured output are handled
//! uniformly.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or -1 if the process was killed by a signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }
}

/// Builder for one external command invocation.
pub struct Cmd {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    /// If true, a non-zero exit is not an error.
    allow_fail: bool,
}

impl Cmd {
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
            current_dir: None,
            allow_fail: false,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    pub fn arg_path(mut self, path: &Path) -> Self {
        self.args.push(path.to_string_lossy().into_owned());
        self
    }

    /// Set the working directory for the child process.
    pub fn dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    /// Allow non-zero exit codes without failing.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    /// Run the command and capture stdout/stderr.
    pub fn run(self) -> Result<CmdOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .with_context(|| format!("failed to execute '{}'", self.program))?;

        let result = CmdOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !self.allow_fail && !result.success() {
            let stderr = result.stderr_trimmed();
            if stderr.is_empty() {
                bail!("'{}' failed (exit code {})", self.program, result.code());
            }
            bail!(
                "'{}' failed (exit code {}):\n{}",
                self.program,
                result.code(),
                stderr
            );
        }

        Ok(result)
    }

    /// Run the command with inherited stdio.
    ///
    /// Output streams straight to the terminal. Used for the long-running
    /// installer and backend invocations where the operator should see
    /// progress as it happens.
    pub fn stream(self) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());
        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to execute '{}'", self.program))?;

        if !self.allow_fail && !status.success() {
            bail!(
                "'{}' failed (exit code {})",
                self.program,
                status.code().unwrap_or(-1)
            );
        }

        Ok(status)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_captures_stdout() {
        let out = Cmd::new("echo").arg("hello").run().unwrap();
        assert!(out.success());
        assert_eq!(out.stdout_trimmed(), "hello");
    }

    #[test]
    fn failure_includes_stderr() {
        let err = Cmd::new("ls").arg("/nonexistent_path_49152").run().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("No such file") || msg.contains("cannot access"));
    }

    #[test]
    fn allow_fail_returns_output() {
        let out = Cmd::new("false").allow_fail().run().unwrap();
        assert!(!out.success());
        assert_eq!(out.code(), 1);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = Cmd::new("program_that_does_not_exist_49152").run().unwrap_err();
        assert!(err.to_string().contains("failed to execute"));
    }

    #[test]
    fn dir_sets_working_directory() {
        let out = Cmd::new("pwd").dir(Path::new("/tmp")).run().unwrap();
        assert!(out.stdout_trimmed().ends_with("tmp"));
    }

    #[test]
    fn stream_reports_exit_status() {
        let status = Cmd::new("sh")
            .args(["-c", "exit 7"])
            .allow_fail()
            .stream()
            .unwrap();
        assert_eq!(status.code(), Some(7));
    }
}
