//! Sorapack - build pipeline for the Sora automation tool.
//!
//! Checks the toolchain, installs dependencies, cleans stale state,
//! drives PyInstaller, and verifies the bundle it leaves behind.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use sorapack::commands;
use sorapack::config::Config;

#[derive(Parser)]
#[command(name = "sorapack")]
#[command(about = "Package the Sora automation tool into a standalone executable")]
#[command(
    after_help = "QUICK START:\n  sorapack preflight  Check the workspace is ready\n  sorapack build      Run the full packaging pipeline\n  sorapack verify     Classify an existing bundle\n  sorapack clean      Remove build artifacts"
)]
struct Cli {
    /// Workspace root containing the target application
    #[arg(short = 'C', long, global = true, default_value = ".")]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full packaging pipeline (toolchain, deps, clean, package, verify)
    Build,

    /// Remove build artifacts (dist, build, bytecode caches)
    Clean,

    /// Classify the artifact tree left by a previous build
    Verify,

    /// Check the workspace without installing or building anything
    Preflight {
        /// Fail with exit code 1 if any check fails
        #[arg(long)]
        strict: bool,
    },

    /// Show information
    Show {
        #[command(subcommand)]
        what: ShowTarget,
    },
}

#[derive(Subcommand)]
enum ShowTarget {
    /// Show resolved configuration
    Config,
    /// Show the loaded build spec
    Spec,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load .env from the workspace before resolving configuration.
    dotenvy::from_path(cli.workspace.join(".env")).ok();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let workspace = cli
        .workspace
        .canonicalize()
        .with_context(|| format!("workspace not found: {}", cli.workspace.display()))?;
    let config = Config::load(&workspace);

    match cli.command {
        Commands::Build => commands::cmd_build(&workspace, &config),

        Commands::Clean => {
            commands::cmd_clean(&workspace, &config)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Verify => commands::cmd_verify(&config),

        Commands::Preflight { strict } => {
            commands::cmd_preflight(&workspace, &config, strict)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Show { what } => {
            let target = match what {
                ShowTarget::Config => commands::show::ShowTarget::Config,
                ShowTarget::Spec => commands::show::ShowTarget::Spec,
            };
            commands::cmd_show(&config, target)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
