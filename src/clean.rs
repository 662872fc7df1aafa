//! Stale build state removal.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Remove the backend's output and scratch directories plus every nested
/// bytecode cache. Missing paths are fine; cleaning an already-clean
/// workspace is a no-op.
pub fn clean_workspace(workspace: &Path, build_dir: &Path, dist_dir: &Path) -> Result<()> {
    let mut cleaned = false;

    for dir in [build_dir, dist_dir] {
        if dir.exists() {
            println!("Removing {}...", dir.display());
            fs::remove_dir_all(dir)?;
            cleaned = true;
        }
    }

    for cache in bytecode_caches(workspace) {
        // A parent cache may already have taken nested ones with it.
        if cache.exists() {
            println!("Removing {}...", cache.display());
            fs::remove_dir_all(&cache)?;
            cleaned = true;
        }
    }

    if cleaned {
        println!("Workspace clean.");
    } else {
        println!("No build artifacts to clean.");
    }

    Ok(())
}

/// All `__pycache__` directories under the workspace.
fn bytecode_caches(workspace: &Path) -> Vec<PathBuf> {
    WalkDir::new(workspace)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir() && entry.file_name() == "__pycache__")
        .map(|entry| entry.into_path())
        .collect()
}
