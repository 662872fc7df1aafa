//! The build spec - what to package and how.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Declarative description of the bundle to produce.
///
/// Loaded once per run from a JSON artifact (default `sorapack.json`) and
/// passed read-only through the pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSpec {
    /// Bundle name; also the executable's base name.
    pub name: String,
    /// Application entry point, relative to the workspace.
    pub entry_point: PathBuf,
    #[serde(default)]
    pub mode: BundleMode,
    /// Suppress the console window (GUI applications).
    #[serde(default)]
    pub windowed: bool,
    #[serde(default)]
    pub icon: Option<PathBuf>,
    /// Data files copied into the bundle.
    #[serde(default)]
    pub resources: Vec<Resource>,
    /// Modules the backend's import analysis misses.
    #[serde(default)]
    pub hidden_imports: Vec<String>,
    /// Modules to leave out of the bundle.
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Hand-written backend spec file. When set it is passed to the
    /// backend as-is and the per-field flags above are not used.
    #[serde(default)]
    pub spec_file: Option<PathBuf>,
}

impl BuildSpec {
    /// Read the build spec from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read build spec {}", path.display()))?;
        let spec: BuildSpec = serde_json::from_str(&content)
            .with_context(|| format!("invalid build spec {}", path.display()))?;
        Ok(spec)
    }
}

/// How the backend lays out the bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleMode {
    /// Executable plus a sibling dependency directory.
    #[default]
    OneDir,
    /// Single self-contained executable.
    OneFile,
}

impl BundleMode {
    pub fn backend_flag(self) -> &'static str {
        match self {
            BundleMode::OneDir => "--onedir",
            BundleMode::OneFile => "--onefile",
        }
    }
}

impl fmt::Display for BundleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleMode::OneDir => write!(f, "onedir"),
            BundleMode::OneFile => write!(f, "onefile"),
        }
    }
}

/// One data file (or directory) bundled with the executable.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resource {
    pub source: PathBuf,
    /// Destination inside the bundle, relative to the bundle root.
    pub target: String,
}
