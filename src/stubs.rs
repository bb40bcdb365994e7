//! Template files installed by the scaffold
//!
//! Stubs are compiled into the binary. A project can replace any of them by
//! placing a file with the same name in its configured `stubs_dir`.

use std::path::{Path, PathBuf};

/// A template file and where it goes
#[derive(Debug, Clone, Copy)]
pub struct Stub {
    /// File name, also the lookup key in a stubs override directory
    pub name: &'static str,
    /// Install location relative to the project root
    pub target: &'static str,
    pub contents: &'static str,
}

impl Stub {
    pub fn target_path(&self, root: &Path) -> PathBuf {
        root.join(self.target)
    }

    /// Override file for this stub, if `stubs_dir` is configured
    pub fn override_path(&self, stubs_dir: Option<&Path>) -> Option<PathBuf> {
        stubs_dir.map(|dir| dir.join(self.name))
    }
}

/// All stubs, in install order
pub const STUBS: &[Stub] = &[
    // Blade
    Stub {
        name: "app.blade.php",
        target: "resources/views/app.blade.php",
        contents: include_str!("../resources/stubs/app.blade.php"),
    },
    // Css
    Stub {
        name: "app.css",
        target: "resources/css/app.css",
        contents: include_str!("../resources/stubs/app.css"),
    },
    // Js
    Stub {
        name: "app.js",
        target: "resources/js/app.js",
        contents: include_str!("../resources/stubs/app.js"),
    },
    // Tailwind
    Stub {
        name: "postcss.config.js",
        target: "postcss.config.js",
        contents: include_str!("../resources/stubs/postcss.config.js"),
    },
    Stub {
        name: "tailwind.config.js",
        target: "tailwind.config.js",
        contents: include_str!("../resources/stubs/tailwind.config.js"),
    },
    // Vite
    Stub {
        name: "vite.config.js",
        target: "vite.config.js",
        contents: include_str!("../resources/stubs/vite.config.js"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find(name: &str) -> Option<&'static Stub> {
        STUBS.iter().find(|stub| stub.name == name)
    }

    #[test]
    fn test_stub_names_and_targets_are_unique() {
        let names: HashSet<_> = STUBS.iter().map(|s| s.name).collect();
        let targets: HashSet<_> = STUBS.iter().map(|s| s.target).collect();

        assert_eq!(names.len(), STUBS.len());
        assert_eq!(targets.len(), STUBS.len());
    }

    #[test]
    fn test_targets_end_with_name() {
        for stub in STUBS {
            assert!(stub.target.ends_with(stub.name), "{}", stub.target);
            assert!(!stub.contents.is_empty(), "{} is empty", stub.name);
        }
    }

    #[test]
    fn test_app_js_wires_inertia_ziggy_and_fontawesome() {
        let app = find("app.js").unwrap().contents;

        assert!(app.contains("createInertiaApp"));
        assert!(app.contains("ZiggyVue"));
        assert!(app.contains("FontAwesomeIcon"));
    }

    #[test]
    fn test_blade_root_view() {
        let blade = find("app.blade.php").unwrap().contents;
        assert!(blade.contains("@inertia"));
        assert!(blade.contains("@routes"));
    }

    #[test]
    fn test_override_path() {
        let stub = find("vite.config.js").unwrap();

        assert_eq!(stub.override_path(None), None);
        assert_eq!(
            stub.override_path(Some(Path::new("stubs"))),
            Some(PathBuf::from("stubs/vite.config.js"))
        );
        assert_eq!(
            stub.target_path(Path::new("/srv/app")),
            PathBuf::from("/srv/app/vite.config.js")
        );
    }

    #[test]
    fn test_unknown_stub() {
        assert!(find("webpack.mix.js").is_none());
    }
}
