//! Package stage - drive the backend to produce the bundle.

use std::path::Path;

use crate::errors::PackageError;
use crate::python::PythonEnv;
use crate::spec::BuildSpec;

/// Separator between source and destination in an `--add-data` flag.
/// The backend expects the platform's path separator here.
const DATA_SEP: char = if cfg!(windows) { ';' } else { ':' };

/// Invoke PyInstaller against the build spec.
///
/// Always a clean, non-interactive, verbose run; backend output streams
/// to the terminal. Packaging takes minutes, so a failure is fatal rather
/// than retried - the operator reads the backend log and re-runs.
pub fn package(
    workspace: &Path,
    py: &PythonEnv,
    spec: &BuildSpec,
    build_dir: &Path,
    dist_dir: &Path,
) -> Result<(), PackageError> {
    let mut cmd = py
        .module("PyInstaller")
        .dir(workspace)
        .args(["--clean", "--noconfirm", "--log-level", "DEBUG"])
        .arg("--distpath")
        .arg_path(dist_dir)
        .arg("--workpath")
        .arg_path(build_dir);

    if let Some(spec_file) = &spec.spec_file {
        let resolved = if spec_file.is_absolute() {
            spec_file.clone()
        } else {
            workspace.join(spec_file)
        };
        if !resolved.exists() {
            return Err(PackageError::SpecMissing { path: resolved });
        }
        println!("Packaging {} from {}...", spec.name, spec_file.display());
        cmd = cmd.arg_path(&resolved);
    } else {
        println!("Packaging {} ({})...", spec.name, spec.mode);
        cmd = cmd
            .args(["--name", &spec.name])
            .arg(spec.mode.backend_flag());
        if spec.windowed {
            cmd = cmd.arg("--windowed");
        }
        if let Some(icon) = &spec.icon {
            cmd = cmd.arg("--icon").arg_path(icon);
        }
        for resource in &spec.resources {
            cmd = cmd.arg("--add-data").arg(format!(
                "{}{}{}",
                resource.source.display(),
                DATA_SEP,
                resource.target
            ));
        }
        for import in &spec.hidden_imports {
            cmd = cmd.args(["--hidden-import", import]);
        }
        for module in &spec.excludes {
            cmd = cmd.args(["--exclude-module", module]);
        }
        cmd = cmd.arg_path(&spec.entry_point);
    }

    let status = cmd
        .allow_fail()
        .stream()
        .map_err(|e| PackageError::Backend(format!("{e:#}")))?;

    if !status.success() {
        return Err(PackageError::BackendFailed {
            code: status.code().unwrap_or(-1),
        });
    }

    Ok(())
}
