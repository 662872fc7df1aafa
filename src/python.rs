//! Handle to the Python interpreter driving pip and PyInstaller.

use anyhow::Result;
use std::path::Path;

use crate::process::Cmd;

/// The interpreter of the target application's environment.
///
/// All installer and backend invocations go through `python -m` so the
/// packages involved are the ones in this interpreter's environment, not
/// whatever else happens to be on PATH.
#[derive(Debug, Clone)]
pub struct PythonEnv {
    interpreter: String,
}

impl PythonEnv {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Command running `python -m <module>`.
    pub fn module(&self, module: &str) -> Cmd {
        Cmd::new(&self.interpreter).arg("-m").arg(module)
    }

    /// Check whether `import <module>` succeeds in this environment.
    pub fn can_import(&self, module: &str, workspace: &Path) -> Result<bool> {
        let out = Cmd::new(&self.interpreter)
            .arg("-c")
            .arg(format!("import {module}"))
            .dir(workspace)
            .allow_fail()
            .run()?;
        Ok(out.success())
    }

    /// Installed backend version, if it can be queried.
    pub fn backend_version(&self, workspace: &Path) -> Option<String> {
        let out = self
            .module("PyInstaller")
            .arg("--version")
            .dir(workspace)
            .allow_fail()
            .run()
            .ok()?;
        if out.success() {
            let version = out.stdout_trimmed();
            if !version.is_empty() {
                return Some(version.to_string());
            }
        }
        None
    }
}
