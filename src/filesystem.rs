//! File system access for scaffold steps

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Trait for the file operations a scaffold needs
pub trait FileSystem {
    /// Copy a file, creating the destination's parent directories
    fn copy(&self, from: &Path, to: &Path) -> Result<()>;

    fn ensure_directory(&self, path: &Path) -> Result<()>;

    fn read(&self, path: &Path) -> Result<String>;

    /// Write a file, creating its parent directories
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// The local disk
pub struct LocalFs;

impl LocalFs {
    fn ensure_parent(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.ensure_directory(parent),
            _ => Ok(()),
        }
    }
}

impl FileSystem for LocalFs {
    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        self.ensure_parent(to)?;
        fs::copy(from, to).with_context(|| {
            format!("Failed to copy {} to {}", from.display(), to.display())
        })?;
        Ok(())
    }

    fn ensure_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }

    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.ensure_parent(path)?;
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
