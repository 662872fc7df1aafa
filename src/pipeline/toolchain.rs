//! Toolchain stage - make sure the packaging backend is available.

use std::path::Path;

use crate::errors::ToolchainError;
use crate::python::PythonEnv;

/// Check PyInstaller is importable; install it via pip if not.
///
/// One install attempt, no retry. Mutates the interpreter's installed
/// package set on the install path.
pub fn ensure_backend_installed(workspace: &Path, py: &PythonEnv) -> Result<(), ToolchainError> {
    let present = py
        .can_import("PyInstaller", workspace)
        .map_err(|e| ToolchainError::Interpreter(format!("{e:#}")))?;

    if present {
        match py.backend_version(workspace) {
            Some(version) => println!("PyInstaller {} present.", version),
            None => println!("PyInstaller present."),
        }
        return Ok(());
    }

    println!("PyInstaller not found, installing...");
    let status = py
        .module("pip")
        .args(["install", "pyinstaller"])
        .dir(workspace)
        .allow_fail()
        .stream()
        .map_err(|e| ToolchainError::Interpreter(format!("{e:#}")))?;

    if !status.success() {
        return Err(ToolchainError::InstallFailed {
            code: status.code().unwrap_or(-1),
        });
    }

    println!("PyInstaller installed.");
    Ok(())
}
