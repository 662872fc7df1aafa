//! Clean command - removes build artifacts.

use anyhow::Result;
use std::path::Path;

use crate::clean;
use crate::config::Config;

/// Execute the clean command.
pub fn cmd_clean(workspace: &Path, config: &Config) -> Result<()> {
    clean::clean_workspace(workspace, &config.build_dir, &config.dist_dir)
}
