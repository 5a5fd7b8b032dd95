//! Integration tests for sprout-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sprout() -> Command {
    Command::cargo_bin("sprout").unwrap()
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_flag_lists_subcommands() {
    sprout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_matches_cargo() {
    sprout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_help_shows_flags() {
    sprout()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--namespace"))
        .stdout(predicate::str::contains("--dep"))
        .stdout(predicate::str::contains("--manifest"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_package_creates_all_files() {
    let temp = TempDir::new().unwrap();

    sprout()
        .current_dir(temp.path())
        .args([
            "new",
            "widget",
            "--namespace",
            "acme",
            "--dep",
            "requests>=2.31",
            "--yes",
        ])
        .assert()
        .success();

    let root = temp.path().join("widget");
    assert!(root.join("pyproject.toml").exists());
    assert!(root.join("requirements.txt").exists());
    assert!(root.join("scripts/setup_env.sh").exists());
    assert!(root.join("src/acme/widget/__init__.py").exists());

    let pyproject = fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"acme-widget\""));
    assert!(pyproject.contains("\"requests>=2.31\","));

    let requirements = fs::read_to_string(root.join("requirements.txt")).unwrap();
    assert_eq!(requirements, "requests>=2.31\n");
}

#[test]
fn new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    sprout()
        .current_dir(temp.path())
        .args([
            "new",
            "widget",
            "--namespace",
            "acme",
            "--yes",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("widget").exists());
}

#[test]
fn new_existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("widget")).unwrap();

    sprout()
        .current_dir(temp.path())
        .args(["new", "widget", "--namespace", "acme", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn new_force_replaces_existing_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("widget");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("stale.txt"), "old").unwrap();

    sprout()
        .current_dir(temp.path())
        .args(["new", "widget", "--namespace", "acme", "--yes", "--force"])
        .assert()
        .success();

    assert!(!root.join("stale.txt").exists());
    assert!(root.join("pyproject.toml").exists());
}

#[test]
fn new_without_namespace_is_user_error() {
    let temp = TempDir::new().unwrap();
    // An empty config file pins the defaults, so a namespace configured in
    // the developer's real config can't make this pass by accident.
    fs::write(temp.path().join("empty-config.toml"), "").unwrap();

    sprout()
        .current_dir(temp.path())
        .args(["new", "widget", "--yes", "--config", "empty-config.toml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--namespace"));
}

// ── init + manifest flow ──────────────────────────────────────────────────────

#[test]
fn init_writes_starter_manifest() {
    let temp = TempDir::new().unwrap();

    sprout()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success();

    let manifest = fs::read_to_string(temp.path().join("sprout.toml")).unwrap();
    assert!(manifest.contains("module_name"));
    assert!(manifest.contains("dependencies"));
}

#[test]
fn init_refuses_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sprout.toml"), "# mine\n").unwrap();

    sprout()
        .current_dir(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    // Untouched.
    assert_eq!(
        fs::read_to_string(temp.path().join("sprout.toml")).unwrap(),
        "# mine\n"
    );
}

#[test]
fn new_from_manifest_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("sprout.toml"),
        r#"
name_space = "crimson"
module_name = "templator"
version = "0.2.0"
description = "Template helpers."
author = "Sisung Kim"
email = "sisung.kim1@gmail.com"
github_id = "crimson206"
dependencies = ["pydantic>=2"]
"#,
    )
    .unwrap();

    sprout()
        .current_dir(temp.path())
        .args([
            "new",
            "templator",
            "--manifest",
            "sprout.toml",
            "--yes",
        ])
        .assert()
        .success();

    let pyproject = fs::read_to_string(temp.path().join("templator/pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"crimson-templator\""));
    assert!(pyproject.contains("version = \"0.2.0\""));
    assert!(temp.path().join("templator/src/crimson/templator/__init__.py").exists());
}

// ── preview ───────────────────────────────────────────────────────────────────

fn write_manifest(temp: &TempDir) {
    fs::write(
        temp.path().join("sprout.toml"),
        r#"
name_space = "acme"
module_name = "widget"
version = "0.1.0"
description = "A widget."
author = "Jo"
email = "jo@example.com"
github_id = "jo"
dependencies = ["left-pad==1.0.0"]
"#,
    )
    .unwrap();
}

#[test]
fn preview_pyproject_prints_rendered_content() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp);

    sprout()
        .current_dir(temp.path())
        .args(["preview", "pyproject"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"acme-widget\""))
        .stdout(predicate::str::contains("\"left-pad==1.0.0\","));

    // Nothing written.
    assert!(!temp.path().join("pyproject.toml").exists());
}

#[test]
fn preview_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    write_manifest(&temp);

    let output = sprout()
        .current_dir(temp.path())
        .args(["preview", "all", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let map = parsed.as_object().unwrap();
    assert_eq!(map.len(), 4);
    assert!(map.contains_key("pyproject.toml"));
    assert!(map.contains_key("requirements.txt"));
}

// ── completions / config ──────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary() {
    sprout()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sprout"));
}

#[test]
fn config_path_prints_a_path() {
    sprout()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn config_list_shows_defaults_section() {
    sprout()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}
