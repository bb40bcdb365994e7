//! npm dependency installation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::NpmSection;
use crate::process::ProcessRunner;

use super::error;

/// Install runtime packages, then dev packages only if that succeeded
pub fn install(root: &Path, npm: &NpmSection, runner: &dyn ProcessRunner) -> Result<bool> {
    let steps = [
        (&npm.dependencies, npm.install_command()),
        (&npm.dev_dependencies, npm.install_dev_command()),
    ];

    for (packages, command) in steps {
        if packages.is_empty() {
            continue;
        }

        let result = runner.run(&command, root)?;
        if !result.success {
            error(&result.error_output);
            println!("  {} {} failed", "✗".red().bold(), command.join(" "));
            return Ok(false);
        }

        println!(
            "  {} Installed {}",
            "✓".green().bold(),
            packages.join(", ").dimmed()
        );
    }

    Ok(true)
}
