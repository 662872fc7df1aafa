//! Bundle inspection and classification.
//!
//! The backend leaves one of two layouts under the dist directory:
//! an executable plus an `_internal/` dependency tree in a subdirectory
//! (onedir), or a single self-contained executable (onefile). The
//! classifier probes for them in that order, first match wins, so a run
//! can never report both layouts.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Dependency tree directory inside a onedir bundle.
pub const INTERNAL_DIR: &str = "_internal";

/// Executable file name for a bundle name on this platform.
pub fn exe_name(name: &str) -> String {
    format!("{name}{EXE_SUFFIX}")
}

/// Shape of the artifact tree left by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactClassification {
    /// Executable plus dependency directory. `complete` is false when the
    /// executable exists but the dependency tree does not; the bundle may
    /// still run if everything was statically linked, so that case is an
    /// advisory rather than a failure.
    OneDir { complete: bool },
    /// Single self-contained executable.
    OneFile,
    /// No usable artifact found.
    Missing,
}

impl ArtifactClassification {
    /// Whether the run produced something the operator can ship.
    pub fn is_usable(self) -> bool {
        !matches!(self, ArtifactClassification::Missing)
    }

    pub fn describe(self) -> String {
        match self {
            ArtifactClassification::OneDir { complete: true } => {
                "onedir bundle (complete)".to_string()
            }
            ArtifactClassification::OneDir { complete: false } => format!(
                "onedir bundle (warning: no {INTERNAL_DIR} directory, bundle may be incomplete)"
            ),
            ArtifactClassification::OneFile => "onefile bundle".to_string(),
            ArtifactClassification::Missing => "no usable bundle".to_string(),
        }
    }
}

/// Classify the artifact tree under `dist_dir` for bundle `name`.
///
/// Purely observational; never mutates the tree.
pub fn classify_bundle(dist_dir: &Path, name: &str) -> ArtifactClassification {
    let exe = exe_name(name);

    if dist_dir.join(name).join(&exe).is_file() {
        let complete = dist_dir.join(name).join(INTERNAL_DIR).is_dir();
        return ArtifactClassification::OneDir { complete };
    }

    if dist_dir.join(&exe).is_file() {
        return ArtifactClassification::OneFile;
    }

    ArtifactClassification::Missing
}

/// Path to the produced executable, if any.
pub fn bundle_path(
    dist_dir: &Path,
    name: &str,
    classification: ArtifactClassification,
) -> Option<PathBuf> {
    let exe = exe_name(name);
    match classification {
        ArtifactClassification::OneDir { .. } => Some(dist_dir.join(name).join(exe)),
        ArtifactClassification::OneFile => Some(dist_dir.join(exe)),
        ArtifactClassification::Missing => None,
    }
}
