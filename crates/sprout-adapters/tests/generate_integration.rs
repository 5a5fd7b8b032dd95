//! Integration tests: full pipeline from manifest to written files.

use std::path::Path;

use sprout_adapters::{LocalFilesystem, MemoryFilesystem, blueprints};
use sprout_core::{
    application::GenerateService,
    domain::{ManifestOptions, PackageManifest},
    error::SproutError,
};

fn manifest() -> PackageManifest {
    PackageManifest {
        name_space: "crimson".into(),
        module_name: "package-name".into(),
        version: "0.1.0".into(),
        description: "Your package description.".into(),
        author: "Sisung Kim".into(),
        email: "sisung.kim1@gmail.com".into(),
        github_id: "crimson206".into(),
        python_requires: ">=3.9".into(),
        topics: vec!["Topic :: Software Development :: Libraries :: Python Modules".into()],
        dependencies: vec!["crimson-intelli-type==0.4.0".into()],
        options: ManifestOptions::default(),
    }
}

const EXPECTED_PYPROJECT: &str = r#"[build-system]
requires = ["setuptools>=61.0.0", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "crimson-package-name"
version = "0.1.0"
description = "Your package description."
readme = "README.md"
authors = [
  { name="Sisung Kim", email="sisung.kim1@gmail.com" },
]

classifiers = [
    "Development Status :: 2 - Pre-Alpha",

    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3.9",
    "Programming Language :: Python :: 3.10",
    "Programming Language :: Python :: 3.11",
    "Programming Language :: Python :: 3.12",

    "Intended Audience :: Developers",

    "Topic :: Software Development :: Libraries :: Python Modules",

    "License :: OSI Approved :: MIT License",
    "Operating System :: OS Independent",

    "Typing :: Typed",

]
dependencies = [
    "crimson-intelli-type==0.4.0",

]
requires-python = ">=3.9"

[project.urls]
"Homepage" = "https://github.com/crimson206/package-name"
"Bug Tracker" = "https://github.com/crimson206/package-name/issues"
"#;

#[test]
fn full_generation_into_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(fs.clone()));

    service
        .generate(&manifest(), &blueprints::builtin(), "out")
        .unwrap();

    // Exact content of the build configuration, byte for byte.
    let pyproject = fs.read_file(Path::new("out/pyproject.toml")).unwrap();
    assert_eq!(pyproject, EXPECTED_PYPROJECT);

    // One requirement per line.
    let requirements = fs.read_file(Path::new("out/requirements.txt")).unwrap();
    assert_eq!(requirements, "crimson-intelli-type==0.4.0\n");

    // Executable environment script.
    let script = fs.read_file(Path::new("out/scripts/setup_env.sh")).unwrap();
    assert!(script.starts_with("#!/usr/bin/env bash\n"));
    assert!(script.contains("conda create --name package-name"));
    assert!(fs.is_executable(Path::new("out/scripts/setup_env.sh")));

    // Namespaced skeleton with underscored module directory.
    let init = fs
        .read_file(Path::new("out/src/crimson/package_name/__init__.py"))
        .unwrap();
    assert_eq!(init, "# Init file for the module\n");
}

#[test]
fn discussion_option_appends_url() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(fs.clone()));

    let mut m = manifest();
    m.options.discussion = true;
    service
        .generate(&m, &blueprints::builtin(), "out")
        .unwrap();

    let pyproject = fs.read_file(Path::new("out/pyproject.toml")).unwrap();
    assert!(pyproject.ends_with(
        "\"Discussion\" = \"https://github.com/crimson206/package-name/discussions\"\n"
    ));
    // The base document is still intact underneath.
    assert!(pyproject.starts_with(EXPECTED_PYPROJECT));
}

#[test]
fn empty_topic_and_dependency_lists_render_cleanly() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(fs.clone()));

    let mut m = manifest();
    m.topics.clear();
    m.dependencies.clear();
    service
        .generate(&m, &blueprints::builtin(), "out")
        .unwrap();

    let pyproject = fs.read_file(Path::new("out/pyproject.toml")).unwrap();
    // The anchor token is deleted; the host line collapses to its own
    // leading whitespace.
    assert!(pyproject.contains("dependencies = [\n    \n]"));
    assert!(!pyproject.contains("\\{"));

    let requirements = fs.read_file(Path::new("out/requirements.txt")).unwrap();
    assert_eq!(requirements, "");
}

#[test]
fn existing_project_directory_is_refused() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(fs.clone()));

    service
        .generate(&manifest(), &blueprints::builtin(), "out")
        .unwrap();
    let err = service
        .generate(&manifest(), &blueprints::builtin(), "out")
        .unwrap_err();

    assert!(matches!(err, SproutError::Application(_)));
    // The first run's output is untouched.
    assert!(fs.read_file(Path::new("out/pyproject.toml")).is_some());
}

#[test]
fn generation_onto_local_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("my-package");

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let report = service
        .generate(&manifest(), &blueprints::builtin(), &root)
        .unwrap();

    assert_eq!(report.package_name, "crimson-package-name");
    assert_eq!(report.files.len(), 4);
    assert_eq!(
        std::fs::read_to_string(root.join("pyproject.toml")).unwrap(),
        EXPECTED_PYPROJECT
    );
    assert!(root.join("src/crimson/package_name/__init__.py").exists());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(root.join("scripts/setup_env.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0, "setup_env.sh should be executable");
    }
}

#[test]
fn invalid_manifest_writes_nothing() {
    let fs = MemoryFilesystem::new();
    let service = GenerateService::new(Box::new(fs.clone()));

    let mut m = manifest();
    m.version = "not-a-version".into();
    assert!(
        service
            .generate(&m, &blueprints::builtin(), "out")
            .is_err()
    );
    assert!(fs.list_files().is_empty());
}
