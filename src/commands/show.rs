//! Show command - display resolved configuration and the build spec.

use anyhow::Result;

use crate::config::Config;
use crate::spec::BuildSpec;

/// Show target for the show command.
pub enum ShowTarget {
    /// Resolved configuration
    Config,
    /// Loaded build spec
    Spec,
}

/// Execute the show command.
pub fn cmd_show(config: &Config, target: ShowTarget) -> Result<()> {
    match target {
        ShowTarget::Config => {
            config.print();
        }
        ShowTarget::Spec => {
            let spec = BuildSpec::load(&config.build_spec)?;
            println!("Build spec ({}):", config.build_spec.display());
            println!("  Name:        {}", spec.name);
            println!("  Entry point: {}", spec.entry_point.display());
            println!("  Mode:        {}", spec.mode);
            println!("  Windowed:    {}", spec.windowed);
            if let Some(icon) = &spec.icon {
                println!("  Icon:        {}", icon.display());
            }
            if !spec.resources.is_empty() {
                println!("  Resources:");
                for resource in &spec.resources {
                    println!("    {} -> {}", resource.source.display(), resource.target);
                }
            }
            if !spec.hidden_imports.is_empty() {
                println!("  Hidden imports: {}", spec.hidden_imports.join(", "));
            }
            if !spec.excludes.is_empty() {
                println!("  Excludes:       {}", spec.excludes.join(", "));
            }
            if let Some(spec_file) = &spec.spec_file {
                println!("  Backend spec file: {}", spec_file.display());
            }
        }
    }
    Ok(())
}
