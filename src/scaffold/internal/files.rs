//! Stub installation and Vue directory layout

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config::FilesSection;
use crate::filesystem::FileSystem;
use crate::paths;
use crate::scaffold::FilesReport;
use crate::stubs::STUBS;

/// Write every stub to its target and ensure the Vue directories exist
///
/// Existing targets are overwritten and listed in `replaced`.
pub fn install(root: &Path, config: &FilesSection, fs: &dyn FileSystem) -> Result<FilesReport> {
    let mut report = FilesReport::default();
    let stubs_dir = config.stubs_dir.as_ref().map(|dir| root.join(dir));

    for stub in STUBS {
        let target = stub.target_path(root);
        let existed = fs.exists(&target);

        match stub
            .override_path(stubs_dir.as_deref())
            .filter(|path| fs.exists(path))
        {
            Some(custom) => fs.copy(&custom, &target)?,
            None => fs.write(&target, stub.contents)?,
        }

        let verb = if existed { "Replaced" } else { "Created" };
        println!("  {} {verb} {}", "✓".green().bold(), stub.target);

        if existed {
            report.replaced.push(target.clone());
        }
        report.written.push(target);
    }

    for dir in paths::vue_directories(root) {
        fs.ensure_directory(&dir)?;
        report.directories.push(dir);
    }
    println!(
        "  {} Ensured resources/js/{{{}}}",
        "✓".green().bold(),
        paths::VUE_DIRECTORIES.join(",")
    );

    Ok(report)
}
