//! Internal implementation for the scaffold steps

pub mod dependencies;
pub mod files;
pub mod middleware;

use anyhow::Result;
use colored::Colorize;

use crate::filesystem::FileSystem;
use crate::process::ProcessRunner;

use super::{MiddlewareStatus, Scaffold, ScaffoldOptions, ScaffoldStatus};

/// Main execution logic for the scaffold
pub fn run(
    scaffold: &Scaffold,
    runner: &dyn ProcessRunner,
    fs: &dyn FileSystem,
    options: &ScaffoldOptions,
) -> Result<ScaffoldStatus> {
    // === STEP 1: NPM DEPENDENCIES ===
    if options.skip_install {
        comment("Skipping npm dependencies (--skip-install).");
    } else {
        comment("Installing npm dependencies. Please wait as this may take a few seconds.");
        if !scaffold.install_dependencies(runner)? {
            return Ok(ScaffoldStatus::DependenciesFailed);
        }
    }

    // === STEP 2: INERTIA MIDDLEWARE ===
    comment("Setting up Inertia middleware.");
    let middleware = scaffold.setup_middleware(runner, fs)?;
    report_middleware(&middleware, &scaffold.config().middleware.entry);

    // === STEP 3: DEFAULT FILES ===
    comment("Setting up default files.");
    let files = scaffold.install_files(fs)?;

    info(
        "The project has been successfully scaffolded for Single Page Application (SPA) \
         development. Remember to execute 'npm install & npm run dev' to complete the setup.",
    );

    Ok(ScaffoldStatus::Completed { middleware, files })
}

fn report_middleware(status: &MiddlewareStatus, entry: &str) {
    match status {
        MiddlewareStatus::Added => {
            println!("  {} Registered {entry}", "✓".green().bold());
        }
        MiddlewareStatus::AlreadyPresent => {
            println!("  {} {entry} already registered", "✓".green().bold());
        }
        MiddlewareStatus::KernelMissing(path) => {
            warn(&format!(
                "{} not found - register {entry} in the web middleware group manually",
                path.display()
            ));
        }
        MiddlewareStatus::Skipped(reason) => {
            warn(&format!(
                "Unexpected kernel format ({reason}) - register {entry} in the web middleware group manually"
            ));
        }
    }
}

fn comment(message: &str) {
    println!("{}", message.yellow());
}

fn info(message: &str) {
    println!("\n{}", message.green());
}

fn warn(message: &str) {
    println!("  {} {}", "⚠️ ".yellow().bold(), message);
}

fn error(message: &str) {
    eprintln!("{}", message.red());
}
