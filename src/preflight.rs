//! Preflight checks - verify the workspace is ready to build.
//!
//! Check-only: nothing is installed and nothing is cleaned. Run with
//! `sorapack preflight` before committing to a long build.

use std::path::Path;

use crate::config::Config;
use crate::python::PythonEnv;
use crate::spec::BuildSpec;

/// Result of a single preflight check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    /// The build cannot succeed.
    Fail,
    /// The build can proceed, with a caveat.
    Warn,
}

impl CheckResult {
    pub fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: None,
        }
    }

    pub fn pass_with(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Pass,
            details: Some(details.to_string()),
        }
    }

    pub fn fail(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Fail,
            details: Some(details.to_string()),
        }
    }

    pub fn warn(name: &str, details: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warn,
            details: Some(details.to_string()),
        }
    }
}

/// Results of all preflight checks.
pub struct PreflightReport {
    pub checks: Vec<CheckResult>,
}

impl PreflightReport {
    /// Returns true if no check failed (warnings are fine).
    pub fn all_passed(&self) -> bool {
        !self.checks.iter().any(|c| c.status == CheckStatus::Fail)
    }

    pub fn fail_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
            .count()
    }

    pub fn warn_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warn)
            .count()
    }

    /// Print the report to stdout.
    pub fn print(&self) {
        println!("=== Preflight Check Results ===\n");

        for check in &self.checks {
            let (icon, status) = match check.status {
                CheckStatus::Pass => ("✓", "PASS"),
                CheckStatus::Fail => ("✗", "FAIL"),
                CheckStatus::Warn => ("⚠", "WARN"),
            };

            print!("  {} [{}] {}", icon, status, check.name);
            match &check.details {
                Some(details) => println!(": {}", details),
                None => println!(),
            }
        }

        println!();
        let passed = self
            .checks
            .iter()
            .filter(|c| c.status == CheckStatus::Pass)
            .count();
        println!("Summary: {}/{} passed", passed, self.checks.len());
        if self.fail_count() > 0 {
            println!("         {} FAILED - the build will not succeed", self.fail_count());
        }
        if self.warn_count() > 0 {
            println!("         {} warnings", self.warn_count());
        }
    }
}

/// Run all preflight checks.
pub fn run_preflight(workspace: &Path, config: &Config) -> PreflightReport {
    let mut checks = Vec::new();

    // Interpreter
    let interpreter = match which::which(&config.python) {
        Ok(path) => {
            checks.push(CheckResult::pass_with(
                &config.python,
                &path.display().to_string(),
            ));
            Some(PythonEnv::new(&config.python))
        }
        Err(_) => {
            checks.push(CheckResult::fail(
                &config.python,
                "Not found on PATH. Install Python or set PYTHON.",
            ));
            None
        }
    };

    // Backend
    if let Some(py) = &interpreter {
        match py.can_import("PyInstaller", workspace) {
            Ok(true) => match py.backend_version(workspace) {
                Some(version) => checks.push(CheckResult::pass_with("PyInstaller", &version)),
                None => checks.push(CheckResult::pass("PyInstaller")),
            },
            Ok(false) => checks.push(CheckResult::warn(
                "PyInstaller",
                "Not importable - will be installed during build.",
            )),
            Err(e) => checks.push(CheckResult::fail("PyInstaller", &format!("{e:#}"))),
        }
    }

    // Dependency manifest
    if config.has_manifest() {
        checks.push(CheckResult::pass_with(
            "manifest",
            &config.requirements.display().to_string(),
        ));
    } else {
        checks.push(CheckResult::warn(
            "manifest",
            "Not found - dependency install will be skipped.",
        ));
    }

    // Build spec
    match BuildSpec::load(&config.build_spec) {
        Ok(spec) => checks.push(CheckResult::pass_with(
            "build spec",
            &format!("{} ({})", config.build_spec.display(), spec.name),
        )),
        Err(e) => checks.push(CheckResult::fail("build spec", &format!("{e:#}"))),
    }

    PreflightReport { checks }
}
