//! Build command - runs the full packaging pipeline.

use anyhow::Result;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use crate::artifact;
use crate::config::Config;
use crate::pipeline::{self, fmt_duration};
use crate::python::PythonEnv;
use crate::spec::BuildSpec;

/// Execute the build command: run every stage, print the summary, and
/// map the outcome to the process exit code.
pub fn cmd_build(workspace: &Path, config: &Config) -> Result<ExitCode> {
    let spec = BuildSpec::load(&config.build_spec)?;
    let py = PythonEnv::new(&config.python);

    println!("=== Packaging {} ===", spec.name);
    let start = Instant::now();

    let report = pipeline::run_pipeline(workspace, &py, &spec, config);
    report.print();

    if let Some(path) = report
        .classification
        .and_then(|c| artifact::bundle_path(&config.dist_dir, &spec.name, c))
    {
        println!("Bundle: {}", path.display());
    }
    if report.succeeded() {
        println!("Done in {}.", fmt_duration(start.elapsed()));
    }

    Ok(report.exit_code())
}
