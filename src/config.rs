//! Configuration management.
//!
//! Settings come from the environment; the CLI loads a `.env` file from the
//! workspace first, and real environment variables win over it. Relative
//! paths resolve against the workspace root so nothing depends on the
//! process working directory.

use std::env;
use std::path::{Path, PathBuf};

/// Interpreter used when PYTHON is not set.
pub const DEFAULT_INTERPRETER: &str = "python";

#[derive(Debug, Clone)]
pub struct Config {
    /// Python interpreter command or path (PYTHON).
    pub python: String,
    /// Build spec artifact (BUILD_SPEC, default sorapack.json).
    pub build_spec: PathBuf,
    /// Dependency manifest (REQUIREMENTS, default requirements.txt).
    pub requirements: PathBuf,
    /// Backend output directory (DIST_DIR, default dist).
    pub dist_dir: PathBuf,
    /// Backend scratch directory (BUILD_DIR, default build).
    pub build_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load(workspace: &Path) -> Self {
        Self {
            python: env_or("PYTHON", DEFAULT_INTERPRETER),
            build_spec: resolve(workspace, env_or("BUILD_SPEC", "sorapack.json")),
            requirements: resolve(workspace, env_or("REQUIREMENTS", "requirements.txt")),
            dist_dir: resolve(workspace, env_or("DIST_DIR", "dist")),
            build_dir: resolve(workspace, env_or("BUILD_DIR", "build")),
        }
    }

    pub fn has_build_spec(&self) -> bool {
        self.build_spec.exists()
    }

    pub fn has_manifest(&self) -> bool {
        self.requirements.exists()
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  PYTHON:       {}", self.python);
        println!("  BUILD_SPEC:   {}", self.build_spec.display());
        println!("  REQUIREMENTS: {}", self.requirements.display());
        println!("  DIST_DIR:     {}", self.dist_dir.display());
        println!("  BUILD_DIR:    {}", self.build_dir.display());
        if self.has_build_spec() {
            println!("  Build spec: FOUND");
        } else {
            println!("  Build spec: NOT FOUND (create one or set BUILD_SPEC)");
        }
        if self.has_manifest() {
            println!("  Manifest: FOUND");
        } else {
            println!("  Manifest: NOT FOUND (dependency install will be skipped)");
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn resolve(workspace: &Path, value: String) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        path
    } else {
        workspace.join(path)
    }
}
