//! Scaffold a Laravel project for single page application development
//!
//! Public interface in this file, step implementations in `internal/`.
//!
//! # Steps
//!
//! 1. **Dependencies**: `npm install` the runtime packages, then the dev
//!    packages. A failure here stops the scaffold.
//! 2. **Middleware**: publish the Inertia middleware and register it in the
//!    `web` group of `app/Http/Kernel.php`. Problems are reported, not fatal.
//! 3. **Files**: install the stubs and create the Vue directories.
//!
//! # Example
//!
//! ```no_run
//! use spaify::config;
//! use spaify::filesystem::LocalFs;
//! use spaify::process::SystemRunner;
//! use spaify::scaffold::{Scaffold, ScaffoldOptions};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let scaffold = Scaffold::new(root, config::load(root)?);
//! scaffold.run(&SystemRunner, &LocalFs, &ScaffoldOptions::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;
use crate::filesystem::FileSystem;
use crate::patch::RegionError;
use crate::process::ProcessRunner;

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// Don't run the package manager
    pub skip_install: bool,
}

/// What happened to the middleware registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MiddlewareStatus {
    Added,
    AlreadyPresent,
    /// No registration file at this path (e.g. Laravel 11 style bootstrap)
    KernelMissing(PathBuf),
    /// The registration file didn't have the expected shape
    Skipped(RegionError),
}

/// Files touched while installing stubs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilesReport {
    /// Every stub target written
    pub written: Vec<PathBuf>,
    /// Subset of `written` that existed before
    pub replaced: Vec<PathBuf>,
    pub directories: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStatus {
    Completed {
        middleware: MiddlewareStatus,
        files: FilesReport,
    },
    /// Package installation failed; nothing else was touched
    DependenciesFailed,
}

impl ScaffoldStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ScaffoldStatus::Completed { .. })
    }
}

pub struct Scaffold {
    root: PathBuf,
    config: ScaffoldConfig,
}

impl Scaffold {
    pub fn new(root: impl AsRef<Path>, config: ScaffoldConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Run all steps in order
    pub fn run(
        &self,
        runner: &dyn ProcessRunner,
        fs: &dyn FileSystem,
        options: &ScaffoldOptions,
    ) -> Result<ScaffoldStatus> {
        internal::run(self, runner, fs, options)
    }

    /// Install runtime then dev packages; returns false on the first failure
    pub fn install_dependencies(&self, runner: &dyn ProcessRunner) -> Result<bool> {
        internal::dependencies::install(&self.root, &self.config.npm, runner)
    }

    /// Publish the middleware and register it in the kernel
    pub fn setup_middleware(
        &self,
        runner: &dyn ProcessRunner,
        fs: &dyn FileSystem,
    ) -> Result<MiddlewareStatus> {
        internal::middleware::setup(&self.root, &self.config.middleware, runner, fs)
    }

    /// Install stubs and create the Vue directories
    pub fn install_files(&self, fs: &dyn FileSystem) -> Result<FilesReport> {
        internal::files::install(&self.root, &self.config.files, fs)
    }
}
