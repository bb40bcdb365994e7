//! Inertia middleware publishing and registration

use anyhow::Result;
use std::path::Path;

use crate::config::MiddlewareSection;
use crate::filesystem::FileSystem;
use crate::patch::{self, PatchOutcome};
use crate::process::ProcessRunner;
use crate::scaffold::MiddlewareStatus;

use super::error;

/// Publish the middleware class, then add it to the kernel's region
///
/// The kernel is read once, transformed, and only written when it changed.
pub fn setup(
    root: &Path,
    config: &MiddlewareSection,
    runner: &dyn ProcessRunner,
    fs: &dyn FileSystem,
) -> Result<MiddlewareStatus> {
    let request = config.patch_request()?;

    if !config.publish_command.is_empty() {
        let result = runner.run(&config.publish_command, root)?;
        if !result.success {
            error(&result.error_output);
        }
    }

    let kernel = root.join(&config.kernel);
    if !fs.exists(&kernel) {
        return Ok(MiddlewareStatus::KernelMissing(kernel));
    }

    let document = fs.read(&kernel)?;
    match patch::patch(&document, &request) {
        PatchOutcome::Patched(updated) => {
            fs.write(&kernel, &updated)?;
            Ok(MiddlewareStatus::Added)
        }
        PatchOutcome::AlreadyPresent => Ok(MiddlewareStatus::AlreadyPresent),
        PatchOutcome::Skipped(reason) => Ok(MiddlewareStatus::Skipped(reason)),
    }
}
