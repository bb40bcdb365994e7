use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use spaify::config::{self, ScaffoldConfig};
use spaify::filesystem::LocalFs;
use spaify::paths;
use spaify::process::{self, SystemRunner};
use spaify::scaffold::{Scaffold, ScaffoldOptions};

/// Scaffold the Laravel project at `path` (default: current directory)
///
/// Returns the process exit code: 0 on success, 1 if dependencies failed.
pub fn execute(path: Option<PathBuf>, skip_install: bool) -> Result<i32> {
    let root = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let root = root
        .canonicalize()
        .with_context(|| format!("Project path {} does not exist", root.display()))?;

    if !paths::is_laravel_project(&root) {
        anyhow::bail!(
            "{} is not a Laravel project (no artisan file found)",
            root.display()
        );
    }

    let config = config::load(&root)?;
    check_tools(&config, skip_install);

    let scaffold = Scaffold::new(&root, config);
    let status = scaffold.run(&SystemRunner, &LocalFs, &ScaffoldOptions { skip_install })?;

    Ok(if status.is_success() { 0 } else { 1 })
}

/// Warn early about missing executables; running them reports the real error
fn check_tools(config: &ScaffoldConfig, skip_install: bool) {
    let mut programs = Vec::new();
    if !skip_install {
        programs.push(config.npm.program.as_str());
    }
    if let Some(program) = config.middleware.publish_command.first() {
        programs.push(program.as_str());
    }

    for program in programs {
        if !process::is_available(program) {
            println!(
                "{} {} not found on PATH",
                "⚠️ ".yellow().bold(),
                program.bold()
            );
        }
    }
}
