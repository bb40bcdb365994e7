//! Scaffold configuration
//!
//! Read from `spaify.toml` in the project root. Every section and field is
//! optional; missing values fall back to the stock Vue + Inertia setup, so a
//! project without the file scaffolds exactly like the defaults below.
//!
//! ```toml
//! [npm]
//! program = "pnpm"
//! dependencies = ["vue", "@inertiajs/vue3"]
//!
//! [middleware]
//! kernel = "app/Http/Kernel.php"
//! entry = '\App\Http\Middleware\HandleInertiaRequests::class'
//!
//! [files]
//! stubs_dir = "stubs/spaify"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::patch::{Markers, PatchRequest, DEFAULT_ENTRY_TOKEN, DEFAULT_SEPARATOR};

/// Environment variable overriding `npm.program`
pub const NPM_ENV: &str = "SPAIFY_NPM";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default)]
    pub npm: NpmSection,
    #[serde(default)]
    pub middleware: MiddlewareSection,
    #[serde(default)]
    pub files: FilesSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpmSection {
    /// Package manager executable
    #[serde(default = "default_program")]
    pub program: String,
    /// Installed with `<program> install`
    #[serde(default = "default_dependencies")]
    pub dependencies: Vec<String>,
    /// Installed with `<program> install -D`
    #[serde(default = "default_dev_dependencies")]
    pub dev_dependencies: Vec<String>,
}

fn default_program() -> String {
    "npm".to_string()
}

fn default_dependencies() -> Vec<String> {
    [
        "vue",
        "@inertiajs/vue3",
        "@fortawesome/fontawesome-svg-core",
        "@fortawesome/free-solid-svg-icons",
        "@fortawesome/free-regular-svg-icons",
        "@fortawesome/free-brands-svg-icons",
        "@fortawesome/vue-fontawesome@latest-3",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_dev_dependencies() -> Vec<String> {
    ["@vitejs/plugin-vue", "tailwindcss", "postcss", "autoprefixer"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for NpmSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            dependencies: default_dependencies(),
            dev_dependencies: default_dev_dependencies(),
        }
    }
}

impl NpmSection {
    /// `<program> install <dependencies...>`
    pub fn install_command(&self) -> Vec<String> {
        self.command(&[], &self.dependencies)
    }

    /// `<program> install -D <dev dependencies...>`
    pub fn install_dev_command(&self) -> Vec<String> {
        self.command(&["-D"], &self.dev_dependencies)
    }

    fn command(&self, flags: &[&str], packages: &[String]) -> Vec<String> {
        let mut command = vec![self.program.clone(), "install".to_string()];
        command.extend(flags.iter().map(|flag| flag.to_string()));
        command.extend(packages.iter().cloned());
        command
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareSection {
    /// Command that publishes the middleware class
    #[serde(default = "default_publish_command")]
    pub publish_command: Vec<String>,
    /// Registration file, relative to the project root
    #[serde(default = "default_kernel")]
    pub kernel: PathBuf,
    /// Region path, outermost first
    #[serde(default = "default_regions")]
    pub regions: Vec<Markers>,
    #[serde(default = "default_entry")]
    pub entry: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_token")]
    pub token: String,
}

fn default_publish_command() -> Vec<String> {
    vec![
        "php".to_string(),
        "artisan".to_string(),
        "inertia:middleware".to_string(),
    ]
}

fn default_kernel() -> PathBuf {
    PathBuf::from(paths::KERNEL)
}

fn default_regions() -> Vec<Markers> {
    vec![
        Markers::new("$middlewareGroups = [", "];"),
        Markers::new("'web' => [", "],"),
    ]
}

fn default_entry() -> String {
    "\\App\\Http\\Middleware\\HandleInertiaRequests::class".to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_token() -> String {
    DEFAULT_ENTRY_TOKEN.to_string()
}

impl Default for MiddlewareSection {
    fn default() -> Self {
        Self {
            publish_command: default_publish_command(),
            kernel: default_kernel(),
            regions: default_regions(),
            entry: default_entry(),
            separator: default_separator(),
            token: default_token(),
        }
    }
}

impl MiddlewareSection {
    /// The region patch this section describes
    pub fn patch_request(&self) -> Result<PatchRequest> {
        for (field, value) in [
            ("entry", &self.entry),
            ("separator", &self.separator),
            ("token", &self.token),
        ] {
            if value.is_empty() {
                anyhow::bail!("middleware.{field} must not be empty");
            }
        }

        let request = PatchRequest::from_path(self.entry.clone(), self.regions.clone())
            .context("middleware.regions must contain at least one marker pair")?;
        Ok(request
            .separator(self.separator.clone())
            .token(self.token.clone()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesSection {
    /// Directory with stub overrides, relative to the project root
    ///
    /// A stub found here by file name replaces the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stubs_dir: Option<PathBuf>,
}

impl ScaffoldConfig {
    /// Apply an override for the package manager program
    pub fn with_npm_program(mut self, program: Option<String>) -> Self {
        if let Some(program) = program.filter(|p| !p.trim().is_empty()) {
            self.npm.program = program;
        }
        self
    }
}

/// Load config for a project root
///
/// Returns defaults if `spaify.toml` doesn't exist. `SPAIFY_NPM` overrides
/// the package manager either way.
pub fn load(root: &Path) -> Result<ScaffoldConfig> {
    let path = paths::config_path(root);
    let config = if path.exists() {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        parse(&content).with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        ScaffoldConfig::default()
    };

    Ok(config.with_npm_program(std::env::var(NPM_ENV).ok()))
}

/// Parse config from TOML text
pub fn parse(content: &str) -> Result<ScaffoldConfig> {
    Ok(toml::from_str(content)?)
}
