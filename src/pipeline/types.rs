//! Pipeline bookkeeping - stages, statuses, and the run report.

use std::process::ExitCode;
use std::time::Duration;

use crate::artifact::ArtifactClassification;

/// One step of the packaging pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ToolchainCheck,
    DependencyInstall,
    Clean,
    Package,
    Verify,
}

impl Stage {
    /// The fixed execution order. Each stage gates the next; a failure
    /// leaves the remaining stages Pending.
    pub const SEQUENCE: [Stage; 5] = [
        Stage::ToolchainCheck,
        Stage::DependencyInstall,
        Stage::Clean,
        Stage::Package,
        Stage::Verify,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Stage::ToolchainCheck => "Toolchain check",
            Stage::DependencyInstall => "Dependency install",
            Stage::Clean => "Workspace clean",
            Stage::Package => "Package",
            Stage::Verify => "Artifact verify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// Outcome of one stage.
#[derive(Debug, Clone)]
pub struct StageRecord {
    pub stage: Stage,
    pub status: StageStatus,
    pub duration: Option<Duration>,
    pub error: Option<String>,
}

impl StageRecord {
    fn pending(stage: Stage) -> Self {
        Self {
            stage,
            status: StageStatus::Pending,
            duration: None,
            error: None,
        }
    }
}

/// Aggregated outcome of one pipeline run.
///
/// Built up by the pipeline as stages execute, read-only afterwards. The
/// reporter turns it into the final transcript and the process exit code.
#[derive(Debug, Clone)]
pub struct RunReport {
    stages: Vec<StageRecord>,
    pub classification: Option<ArtifactClassification>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            stages: Stage::SEQUENCE.iter().copied().map(StageRecord::pending).collect(),
            classification: None,
        }
    }

    pub fn stages(&self) -> &[StageRecord] {
        &self.stages
    }

    pub fn stage(&self, stage: Stage) -> &StageRecord {
        self.stages
            .iter()
            .find(|r| r.stage == stage)
            .expect("stage in sequence")
    }

    fn stage_mut(&mut self, stage: Stage) -> &mut StageRecord {
        self.stages
            .iter_mut()
            .find(|r| r.stage == stage)
            .expect("stage in sequence")
    }

    /// Mark a stage as running. Stages only move forward.
    pub fn begin(&mut self, stage: Stage) {
        let record = self.stage_mut(stage);
        debug_assert_eq!(record.status, StageStatus::Pending);
        record.status = StageStatus::Running;
    }

    pub fn succeed(&mut self, stage: Stage, took: Duration) {
        let record = self.stage_mut(stage);
        debug_assert_eq!(record.status, StageStatus::Running);
        record.status = StageStatus::Succeeded;
        record.duration = Some(took);
    }

    pub fn fail(&mut self, stage: Stage, error: String, took: Duration) {
        let record = self.stage_mut(stage);
        debug_assert_eq!(record.status, StageStatus::Running);
        record.status = StageStatus::Failed;
        record.duration = Some(took);
        record.error = Some(error);
    }

    pub fn all_stages_succeeded(&self) -> bool {
        self.stages.iter().all(|r| r.status == StageStatus::Succeeded)
    }

    /// Overall success: every stage succeeded and the verifier found a
    /// usable bundle.
    pub fn succeeded(&self) -> bool {
        self.all_stages_succeeded() && self.classification.is_some_and(|c| c.is_usable())
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Print the stage-ordered run summary.
    pub fn print(&self) {
        println!("\n=== Run Summary ===\n");

        for record in &self.stages {
            let (icon, status) = match record.status {
                StageStatus::Succeeded => ("✓", " OK "),
                StageStatus::Failed => ("✗", "FAIL"),
                StageStatus::Running => ("⚠", "RUN "),
                StageStatus::Pending => ("○", "SKIP"),
            };

            print!("  {} [{}] {}", icon, status, record.stage.title());
            if let Some(error) = &record.error {
                print!(": {}", error);
            }
            if let Some(took) = record.duration {
                print!(" ({})", fmt_duration(took));
            }
            println!();
        }

        println!();
        if let Some(classification) = self.classification {
            println!("Artifact: {}", classification.describe());
        }
        if self.succeeded() {
            println!("Build succeeded.");
        } else {
            println!("Build failed.");
        }
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Short human-readable duration.
pub fn fmt_duration(took: Duration) -> String {
    let secs = took.as_secs_f64();
    if secs >= 60.0 {
        format!("{:.1}m", secs / 60.0)
    } else {
        format!("{:.1}s", secs)
    }
}
