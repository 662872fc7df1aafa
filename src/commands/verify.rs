//! Verify command - classify an existing artifact tree.

use anyhow::Result;
use std::process::ExitCode;

use crate::artifact;
use crate::config::Config;
use crate::spec::BuildSpec;

/// Execute the verify command against whatever a previous build left in
/// the dist directory.
pub fn cmd_verify(config: &Config) -> Result<ExitCode> {
    let spec = BuildSpec::load(&config.build_spec)?;
    let classification = artifact::classify_bundle(&config.dist_dir, &spec.name);

    println!("Artifact: {}", classification.describe());
    if let Some(path) = artifact::bundle_path(&config.dist_dir, &spec.name, classification) {
        println!("Bundle: {}", path.display());
    }

    Ok(if classification.is_usable() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
