//! The pipeline's fatal error taxonomy.
//!
//! One error type per checked stage. All of them end the run; nothing here
//! is retried. Environment-level failures (filesystem, config reads) travel
//! as `anyhow::Error` instead.

use std::path::PathBuf;

use thiserror::Error;

/// Toolchain stage failures.
#[derive(Debug, Clone, Error)]
pub enum ToolchainError {
    /// The configured interpreter could not be invoked at all.
    #[error("failed to invoke the Python interpreter: {0}")]
    Interpreter(String),
    /// The backend install ran and reported failure.
    #[error("PyInstaller install failed (exit code {code})")]
    InstallFailed { code: i32 },
}

/// Dependency stage failures.
#[derive(Debug, Clone, Error)]
pub enum DependencyError {
    #[error("failed to invoke pip: {0}")]
    Installer(String),
    #[error("dependency install failed (exit code {code})")]
    InstallFailed { code: i32 },
}

/// Package stage failures.
#[derive(Debug, Clone, Error)]
pub enum PackageError {
    /// The hand-written backend spec file named in the build spec is gone.
    #[error("backend spec file not found: {}", .path.display())]
    SpecMissing { path: PathBuf },
    #[error("failed to invoke PyInstaller: {0}")]
    Backend(String),
    /// The backend ran and exited non-zero.
    #[error("PyInstaller failed (exit code {code})")]
    BackendFailed { code: i32 },
}

/// The verifier found no usable bundle.
#[derive(Debug, Clone, Error)]
#[error("no usable bundle found under {}", .output_root.display())]
pub struct VerificationError {
    pub output_root: PathBuf,
}
