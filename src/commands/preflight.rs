//! Preflight command - runs preflight checks.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::Config;
use crate::preflight;

/// Execute the preflight command.
pub fn cmd_preflight(workspace: &Path, config: &Config, strict: bool) -> Result<()> {
    println!("Running preflight checks...\n");
    let report = preflight::run_preflight(workspace, config);
    report.print();

    if !report.all_passed() {
        if strict {
            bail!(
                "Preflight failed: {} check(s) failed. Fix the issues above before building.",
                report.fail_count()
            );
        }
        println!("Some checks failed. Use --strict to fail with exit code 1.");
    }
    Ok(())
}
