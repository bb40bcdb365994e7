//! End-to-end scaffold runs against a scratch Laravel project
//!
//! External commands are recorded by a fake runner instead of executed.

use anyhow::Result;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use spaify::config::{self, ScaffoldConfig};
use spaify::filesystem::LocalFs;
use spaify::patch::RegionError;
use spaify::process::{ProcessResult, ProcessRunner};
use spaify::scaffold::{MiddlewareStatus, Scaffold, ScaffoldOptions, ScaffoldStatus};

const KERNEL: &str = include_str!("fixtures/Kernel.php");
const INERTIA: &str = "\\App\\Http\\Middleware\\HandleInertiaRequests::class";

/// Records every command; fails the first one containing `fail_on`
#[derive(Default)]
struct FakeRunner {
    calls: RefCell<Vec<Vec<String>>>,
    fail_on: Option<&'static str>,
}

impl FakeRunner {
    fn failing_on(arg: &'static str) -> Self {
        Self {
            fail_on: Some(arg),
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.join(" ")).collect()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, command: &[String], _cwd: &Path) -> Result<ProcessResult> {
        self.calls.borrow_mut().push(command.to_vec());
        match self.fail_on {
            Some(arg) if command.iter().any(|c| c == arg) => {
                Ok(ProcessResult::failed("npm ERR! code E404"))
            }
            _ => Ok(ProcessResult::ok()),
        }
    }
}

fn laravel_project() -> Result<TempDir> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("artisan"), "#!/usr/bin/env php\n")?;
    fs::create_dir_all(temp.path().join("app/Http"))?;
    fs::write(temp.path().join("app/Http/Kernel.php"), KERNEL)?;
    Ok(temp)
}

fn scaffold(root: &Path) -> Result<Scaffold> {
    Ok(Scaffold::new(root, config::load(root)?))
}

#[test]
fn test_full_scaffold() -> Result<()> {
    let project = laravel_project()?;
    let runner = FakeRunner::default();

    let status = scaffold(project.path())?.run(&runner, &LocalFs, &ScaffoldOptions::default())?;

    let ScaffoldStatus::Completed { middleware, files } = status else {
        panic!("scaffold should complete");
    };
    assert_eq!(middleware, MiddlewareStatus::Added);

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].ends_with("install vue @inertiajs/vue3 @fortawesome/fontawesome-svg-core @fortawesome/free-solid-svg-icons @fortawesome/free-regular-svg-icons @fortawesome/free-brands-svg-icons @fortawesome/vue-fontawesome@latest-3"));
    assert!(calls[1].ends_with("install -D @vitejs/plugin-vue tailwindcss postcss autoprefixer"));
    assert_eq!(calls[2], "php artisan inertia:middleware");

    let kernel = fs::read_to_string(project.path().join("app/Http/Kernel.php"))?;
    assert_eq!(kernel.matches(INERTIA).count(), 1);

    for target in [
        "resources/views/app.blade.php",
        "resources/css/app.css",
        "resources/js/app.js",
        "postcss.config.js",
        "tailwind.config.js",
        "vite.config.js",
    ] {
        assert!(project.path().join(target).is_file(), "{target} missing");
    }
    for dir in ["Components", "Layouts", "Pages"] {
        assert!(project.path().join("resources/js").join(dir).is_dir());
    }
    assert_eq!(files.written.len(), 6);
    assert!(files.replaced.is_empty());
    assert_eq!(files.directories.len(), 3);

    Ok(())
}

#[test]
fn test_second_run_is_idempotent() -> Result<()> {
    let project = laravel_project()?;
    let options = ScaffoldOptions { skip_install: true };

    scaffold(project.path())?.run(&FakeRunner::default(), &LocalFs, &options)?;
    let first = fs::read_to_string(project.path().join("app/Http/Kernel.php"))?;

    let status = scaffold(project.path())?.run(&FakeRunner::default(), &LocalFs, &options)?;
    let second = fs::read_to_string(project.path().join("app/Http/Kernel.php"))?;

    assert_eq!(first, second);
    let ScaffoldStatus::Completed { middleware, files } = status else {
        panic!("scaffold should complete");
    };
    assert_eq!(middleware, MiddlewareStatus::AlreadyPresent);
    assert_eq!(files.replaced.len(), 6);

    Ok(())
}

#[test]
fn test_dev_dependencies_skipped_when_first_install_fails() -> Result<()> {
    let project = laravel_project()?;
    let runner = FakeRunner::failing_on("vue");

    let status = scaffold(project.path())?.run(&runner, &LocalFs, &ScaffoldOptions::default())?;

    assert_eq!(status, ScaffoldStatus::DependenciesFailed);
    assert!(!status.is_success());
    assert_eq!(runner.calls().len(), 1);

    // Nothing else touched
    let kernel = fs::read_to_string(project.path().join("app/Http/Kernel.php"))?;
    assert_eq!(kernel, KERNEL);
    assert!(!project.path().join("vite.config.js").exists());

    Ok(())
}

#[test]
fn test_dev_install_failure_stops_scaffold() -> Result<()> {
    let project = laravel_project()?;
    let runner = FakeRunner::failing_on("-D");

    let status = scaffold(project.path())?.run(&runner, &LocalFs, &ScaffoldOptions::default())?;

    assert_eq!(status, ScaffoldStatus::DependenciesFailed);
    assert_eq!(runner.calls().len(), 2);
    Ok(())
}

#[test]
fn test_publish_failure_is_not_fatal() -> Result<()> {
    let project = laravel_project()?;
    let runner = FakeRunner::failing_on("inertia:middleware");

    let status = scaffold(project.path())?.run(&runner, &LocalFs, &ScaffoldOptions::default())?;

    assert!(status.is_success());
    Ok(())
}

#[test]
fn test_missing_kernel_is_reported() -> Result<()> {
    let project = laravel_project()?;
    fs::remove_file(project.path().join("app/Http/Kernel.php"))?;

    let status = scaffold(project.path())?.setup_middleware(&FakeRunner::default(), &LocalFs)?;

    assert_eq!(
        status,
        MiddlewareStatus::KernelMissing(project.path().join("app/Http/Kernel.php"))
    );
    Ok(())
}

#[test]
fn test_unexpected_kernel_left_unchanged() -> Result<()> {
    let project = laravel_project()?;
    let kernel_path = project.path().join("app/Http/Kernel.php");
    let custom = "<?php\n\nclass Kernel\n{\n    protected $middleware = [];\n}\n";
    fs::write(&kernel_path, custom)?;

    let status = scaffold(project.path())?.setup_middleware(&FakeRunner::default(), &LocalFs)?;

    assert_eq!(
        status,
        MiddlewareStatus::Skipped(RegionError::MarkerNotFound {
            marker: "$middlewareGroups = [".to_string()
        })
    );
    assert_eq!(fs::read_to_string(&kernel_path)?, custom);
    Ok(())
}

#[test]
fn test_config_file_and_stub_overrides() -> Result<()> {
    let project = laravel_project()?;
    fs::write(
        project.path().join("spaify.toml"),
        r#"
[npm]
program = "pnpm"
dependencies = ["vue"]
dev_dependencies = []

[middleware]
publish_command = []

[files]
stubs_dir = "stubs"
"#,
    )?;
    fs::create_dir_all(project.path().join("stubs"))?;
    fs::write(project.path().join("stubs/app.css"), "/* custom */\n")?;

    let config: ScaffoldConfig = config::load(project.path())?.with_npm_program(Some("pnpm".into()));
    let runner = FakeRunner::default();
    let status = Scaffold::new(project.path(), config).run(&runner, &LocalFs, &ScaffoldOptions::default())?;

    assert!(status.is_success());
    assert_eq!(runner.calls(), vec!["pnpm install vue"]);
    assert_eq!(
        fs::read_to_string(project.path().join("resources/css/app.css"))?,
        "/* custom */\n"
    );
    assert!(fs::read_to_string(project.path().join("resources/js/app.js"))?
        .contains("createInertiaApp"));

    Ok(())
}
