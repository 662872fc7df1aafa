//! Dependency stage - install the application's requirements.

use std::path::Path;

use crate::errors::DependencyError;
use crate::python::PythonEnv;

/// Install every dependency in the manifest into the interpreter's
/// environment. The whole batch is one pip run; any failure fails the
/// stage. A missing manifest skips the stage with a note.
pub fn install_dependencies(
    workspace: &Path,
    py: &PythonEnv,
    manifest: &Path,
) -> Result<(), DependencyError> {
    if !manifest.exists() {
        println!(
            "No dependency manifest at {}, skipping install.",
            manifest.display()
        );
        return Ok(());
    }

    println!("Installing dependencies from {}...", manifest.display());
    let status = py
        .module("pip")
        .args(["install", "-r"])
        .arg_path(manifest)
        .dir(workspace)
        .allow_fail()
        .stream()
        .map_err(|e| DependencyError::Installer(format!("{e:#}")))?;

    if !status.success() {
        return Err(DependencyError::InstallFailed {
            code: status.code().unwrap_or(-1),
        });
    }

    println!("Dependencies up to date.");
    Ok(())
}
