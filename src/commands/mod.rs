//! CLI command handlers.
//!
//! Each submodule handles one CLI command:
//! - `build` - run the full packaging pipeline
//! - `clean` - remove build artifacts
//! - `verify` - classify the existing artifact tree
//! - `preflight` - check the workspace without building
//! - `show` - display configuration and build spec

pub mod build;
pub mod clean;
pub mod preflight;
pub mod show;
pub mod verify;

pub use build::cmd_build;
pub use clean::cmd_clean;
pub use preflight::cmd_preflight;
pub use show::cmd_show;
pub use verify::cmd_verify;
