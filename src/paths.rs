//! Single source of truth for the Laravel project layout spaify touches.
//!
//! This module defines WHERE files live. It has no I/O, no validation,
//! no business logic.
//!
//! ```text
//! project/
//! ├── artisan                  # Laravel marker
//! ├── spaify.toml              # Optional scaffold config
//! ├── app/Http/Kernel.php      # Middleware registration (patched)
//! ├── postcss.config.js        # Stub
//! ├── tailwind.config.js       # Stub
//! ├── vite.config.js           # Stub
//! └── resources/
//!     ├── views/app.blade.php  # Stub
//!     ├── css/app.css          # Stub
//!     └── js/
//!         ├── app.js           # Stub
//!         ├── Components/
//!         ├── Layouts/
//!         └── Pages/
//! ```

use std::path::{Path, PathBuf};

/// Scaffold config file name
pub const CONFIG_FILE: &str = "spaify.toml";

/// Default middleware registration file, relative to the base path
pub const KERNEL: &str = "app/Http/Kernel.php";

/// Directories the Vue frontend expects, relative to `resources/js/`
pub const VUE_DIRECTORIES: &[&str] = &["Components", "Layouts", "Pages"];

/// Laravel's console entry point: `{root}/artisan`
pub fn artisan(root: &Path) -> PathBuf {
    root.join("artisan")
}

/// Scaffold config: `{root}/spaify.toml`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resource directory: `{root}/resources/{relative}`
pub fn resource_path(root: &Path, relative: &str) -> PathBuf {
    root.join("resources").join(relative)
}

/// Vue directories: `{root}/resources/js/{Components,Layouts,Pages}`
pub fn vue_directories(root: &Path) -> Vec<PathBuf> {
    VUE_DIRECTORIES
        .iter()
        .map(|dir| resource_path(root, "js").join(dir))
        .collect()
}

/// Is this a Laravel project root?
pub fn is_laravel_project(root: &Path) -> bool {
    artisan(root).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_paths() {
        let root = Path::new("/tmp/shop");

        assert_eq!(artisan(root), PathBuf::from("/tmp/shop/artisan"));
        assert_eq!(config_path(root), PathBuf::from("/tmp/shop/spaify.toml"));
        assert_eq!(
            resource_path(root, "views/app.blade.php"),
            PathBuf::from("/tmp/shop/resources/views/app.blade.php")
        );
    }

    #[test]
    fn test_vue_directories() {
        let dirs = vue_directories(Path::new("/tmp/shop"));

        assert_eq!(dirs.len(), 3);
        assert!(dirs[0].ends_with("resources/js/Components"));
        assert!(dirs[2].ends_with("resources/js/Pages"));
    }

    #[test]
    fn test_is_laravel_project() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(!is_laravel_project(temp.path()));

        std::fs::write(temp.path().join("artisan"), "#!/usr/bin/env php").unwrap();
        assert!(is_laravel_project(temp.path()));
    }
}
