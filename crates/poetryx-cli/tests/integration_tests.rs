//! Integration tests for poetryx-cli.
//!
//! The pipeline tests drive the real binary against a fake `poetry` shell
//! script placed in a tempdir, so no real Poetry installation is needed.
//! Script-based tests are unix-only.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn poetryx() -> Command {
    let mut cmd = Command::cargo_bin("poetryx").unwrap();
    // Hermetic environment: no user config, no env overrides.
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    poetryx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Poetry project bootstrapper"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    poetryx()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_help_lists_flags() {
    poetryx()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--directory"))
        .stdout(predicate::str::contains("--poetry-path"))
        .stdout(predicate::str::contains("--no-install"));
}

#[test]
fn completions_bash() {
    poetryx()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("poetryx"));
}

#[test]
fn invalid_project_name_is_rejected_before_anything_runs() {
    poetryx()
        .args(["init", "bad name"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[cfg(unix)]
mod pipeline {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    const ENTRY_STUB: &str = "def main() -> None:\n    pass\n\nif __name__ == \"__main__\":\n    main()\n";

    /// Install a fake `poetry` script into `dir` and return its path.
    ///
    /// The script records every invocation in `calls.log` next to itself.
    /// `new` generates the same artifacts real Poetry does: the project
    /// directory, an empty package `__init__.py`, and a pyproject.toml.
    fn install_fake_poetry(dir: &Path) -> PathBuf {
        let script = dir.join("poetry");
        let log = dir.join("calls.log");
        let body = format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
cmd="$1"; shift
case "$cmd" in
  new)
    name="$1"; shift
    dir="."
    for arg in "$@"; do
      case "$arg" in
        --directory=*) dir="${{arg#--directory=}}" ;;
      esac
    done
    mkdir -p "$dir/$name/$name"
    : > "$dir/$name/$name/__init__.py"
    cat > "$dir/$name/pyproject.toml" <<EOF
[tool.poetry]
name = "$name"
version = "0.1.0"
description = ""
authors = ["Test <test@example.com>"]
readme = "README.md"

[tool.poetry.dependencies]
python = "^3.11"

[build-system]
requires = ["poetry-core"]
build-backend = "poetry.core.masonry.api"
EOF
    ;;
  install)
    ;;
  *)
    exit 1
    ;;
esac
"#,
            log = log.display()
        );
        fs::write(&script, body).unwrap();
        let mut perms = fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script, perms).unwrap();
        script
    }

    fn call_log(tool_dir: &Path) -> String {
        fs::read_to_string(tool_dir.join("calls.log")).unwrap_or_default()
    }

    #[test]
    fn end_to_end_bootstrap() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let poetry = install_fake_poetry(tools.path());

        poetryx()
            .args([
                "init",
                "demo",
                "--directory",
                work.path().to_str().unwrap(),
                "--poetry-path",
                poetry.to_str().unwrap(),
            ])
            .assert()
            .success();

        let project = work.path().join("demo");

        // Manifest: script registered, generated fields preserved.
        let manifest = fs::read_to_string(project.join("pyproject.toml")).unwrap();
        assert!(manifest.contains("main = \"demo:main\""));
        assert!(manifest.contains("name = \"demo\""));
        assert!(manifest.contains("build-backend = \"poetry.core.masonry.api\""));

        // Entry file: exactly the canonical stub.
        let entry = fs::read_to_string(project.join("demo/__init__.py")).unwrap();
        assert_eq!(entry, ENTRY_STUB);

        // Scaffold directories and their ignore entries.
        assert!(project.join("assets").is_dir());
        assert!(project.join("build").is_dir());
        let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
        assert_eq!(gitignore, "assets/\nbuild/\n");

        // Both external invocations happened, in order.
        let log = call_log(tools.path());
        let calls: Vec<&str> = log.lines().collect();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("new demo"));
        assert!(calls[1].starts_with("install"));
    }

    #[test]
    fn no_install_skips_the_install_step() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let poetry = install_fake_poetry(tools.path());

        poetryx()
            .args([
                "init",
                "demo",
                "--no-install",
                "--directory",
                work.path().to_str().unwrap(),
                "--poetry-path",
                poetry.to_str().unwrap(),
            ])
            .assert()
            .success();

        let log = call_log(tools.path());
        assert!(log.contains("new demo"));
        assert!(!log.contains("install"));
    }

    #[test]
    fn second_init_fails_without_invoking_poetry_again() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let poetry = install_fake_poetry(tools.path());
        let args = [
            "init",
            "demo",
            "--no-install",
            "--directory",
            work.path().to_str().unwrap(),
            "--poetry-path",
            poetry.to_str().unwrap(),
        ];

        poetryx().args(args).assert().success();
        poetryx()
            .args(args)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("already exists"));

        // Exactly one `poetry new` across both runs.
        let news = call_log(tools.path())
            .lines()
            .filter(|l| l.starts_with("new"))
            .count();
        assert_eq!(news, 1);
    }

    #[test]
    fn existing_entry_file_content_is_protected() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let poetry = install_fake_poetry(tools.path());

        // Pre-create the project the way a failed earlier run would leave
        // it, with user content in the entry file.
        let fake_new = std::process::Command::new(&poetry)
            .args([
                "new",
                "demo",
                &format!("--directory={}", work.path().display()),
            ])
            .status()
            .unwrap();
        assert!(fake_new.success());
        let entry = work.path().join("demo/demo/__init__.py");
        fs::write(&entry, "x").unwrap();

        // Bootstrap fails on the existing directory; the artifacts stay put.
        poetryx()
            .args([
                "init",
                "demo",
                "--no-install",
                "--directory",
                work.path().to_str().unwrap(),
                "--poetry-path",
                poetry.to_str().unwrap(),
            ])
            .assert()
            .failure();
        assert_eq!(fs::read_to_string(&entry).unwrap(), "x");
    }

    #[test]
    fn missing_poetry_prints_remediation_and_exits_not_found() {
        let empty = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        poetryx()
            .env("PATH", empty.path())
            .args(["init", "demo", "--directory", work.path().to_str().unwrap()])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("--poetry-path"));
    }

    #[test]
    fn explicit_poetry_path_that_does_not_exist_is_reported() {
        let work = TempDir::new().unwrap();

        poetryx()
            .args([
                "init",
                "demo",
                "--directory",
                work.path().to_str().unwrap(),
                "--poetry-path",
                "/definitely/not/poetry",
            ])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("/definitely/not/poetry"));
    }

    #[test]
    fn poetry_resolved_from_search_path() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        install_fake_poetry(tools.path());

        poetryx()
            .env("PATH", tools.path())
            .args([
                "init",
                "demo",
                "--no-install",
                "--directory",
                work.path().to_str().unwrap(),
            ])
            .assert()
            .success();
        assert!(work.path().join("demo/pyproject.toml").is_file());
    }

    #[test]
    fn failing_install_surfaces_external_tool_error() {
        let tools = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let poetry = install_fake_poetry(tools.path());
        // Make `install` (and any unknown command) fail.
        fs::write(
            &poetry,
            "#!/bin/sh\nif [ \"$1\" = new ]; then mkdir -p \"$4\"; fi\nexit 9\n",
        )
        .unwrap();

        poetryx()
            .args([
                "init",
                "demo",
                "--directory",
                work.path().to_str().unwrap(),
                "--poetry-path",
                poetry.to_str().unwrap(),
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("poetry new"));
    }
}
