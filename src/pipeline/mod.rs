//! The packaging pipeline.
//!
//! A strictly sequential run of checked stages: toolchain check,
//! dependency install, workspace clean, backend invocation, artifact
//! verification. Each stage gates the next; the first failure leaves the
//! rest untouched and the report carries the diagnostic.

mod deps;
mod package;
mod toolchain;
mod types;

pub use types::{fmt_duration, RunReport, Stage, StageRecord, StageStatus};

use anyhow::Result;
use std::path::Path;
use std::time::Instant;

use crate::artifact;
use crate::clean;
use crate::config::Config;
use crate::errors::VerificationError;
use crate::python::PythonEnv;
use crate::spec::BuildSpec;

/// Run the full pipeline against a workspace.
///
/// Never returns an error: every outcome, fatal or not, lands in the
/// returned report.
pub fn run_pipeline(
    workspace: &Path,
    py: &PythonEnv,
    spec: &BuildSpec,
    config: &Config,
) -> RunReport {
    let mut report = RunReport::new();

    let ok = run_stage(&mut report, Stage::ToolchainCheck, || {
        toolchain::ensure_backend_installed(workspace, py).map_err(Into::into)
    });
    if !ok {
        return report;
    }

    let ok = run_stage(&mut report, Stage::DependencyInstall, || {
        deps::install_dependencies(workspace, py, &config.requirements).map_err(Into::into)
    });
    if !ok {
        return report;
    }

    let ok = run_stage(&mut report, Stage::Clean, || {
        clean::clean_workspace(workspace, &config.build_dir, &config.dist_dir)
    });
    if !ok {
        return report;
    }

    let ok = run_stage(&mut report, Stage::Package, || {
        package::package(workspace, py, spec, &config.build_dir, &config.dist_dir)
            .map_err(Into::into)
    });
    if !ok {
        return report;
    }

    verify(&mut report, &config.dist_dir, &spec.name);
    report
}

fn run_stage(report: &mut RunReport, stage: Stage, body: impl FnOnce() -> Result<()>) -> bool {
    println!("\n=== {} ===", stage.title());
    report.begin(stage);
    let start = Instant::now();

    match body() {
        Ok(()) => {
            report.succeed(stage, start.elapsed());
            true
        }
        Err(err) => {
            report.fail(stage, format!("{err:#}"), start.elapsed());
            false
        }
    }
}

/// Classification is observational; only a missing bundle fails the stage.
fn verify(report: &mut RunReport, dist_dir: &Path, name: &str) {
    println!("\n=== {} ===", Stage::Verify.title());
    report.begin(Stage::Verify);
    let start = Instant::now();

    let classification = artifact::classify_bundle(dist_dir, name);
    report.classification = Some(classification);
    println!("Artifact: {}", classification.describe());

    if classification.is_usable() {
        report.succeed(Stage::Verify, start.elapsed());
    } else {
        let err = VerificationError {
            output_root: dist_dir.to_path_buf(),
        };
        report.fail(Stage::Verify, err.to_string(), start.elapsed());
    }
}
