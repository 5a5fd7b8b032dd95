//! Built-in blueprint set.
//!
//! This module provides [`builtin`], the single entry-point for the file set
//! a bootstrap run emits. Each blueprint pairs a path template with a host
//! content template; scalars use `\[name\]` tokens, loop-generated blocks
//! use `\{name\}` anchors. The binding names are the contract between these
//! templates and `PackageManifest::bindings()` — a template token with no
//! corresponding binding fails the whole run before anything is written.
//!
//! All templates are compile-time strings (`TemplateSource::Static`), so the
//! blueprint set allocates nothing beyond the `Vec` itself.

use sprout_core::domain::{BlockBlueprint, FileBlueprint, OptionalSection};

// ── Template sources ──────────────────────────────────────────────────────────

/// Host template for `pyproject.toml`.
///
/// The `topics` anchor sits at column 4 inside the classifiers array; the
/// composer re-indents every generated classifier line to match. Same for
/// `dependencies`.
const PYPROJECT: &str = r#"[build-system]
requires = ["setuptools>=61.0.0", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "\[package_name\]"
version = "\[version\]"
description = "\[description\]"
readme = "README.md"
authors = [
  { name="\[author\]", email="\[email\]" },
]

classifiers = [
    "Development Status :: 2 - Pre-Alpha",

    "Programming Language :: Python :: 3",
    "Programming Language :: Python :: 3.9",
    "Programming Language :: Python :: 3.10",
    "Programming Language :: Python :: 3.11",
    "Programming Language :: Python :: 3.12",

    "Intended Audience :: Developers",

    \{topics\}
    "License :: OSI Approved :: MIT License",
    "Operating System :: OS Independent",

    "Typing :: Typed",

]
dependencies = [
    \{dependencies\}
]
requires-python = "\[python_requires\]"

[project.urls]
"Homepage" = "https://github.com/\[github_id\]/\[module_name\]"
"Bug Tracker" = "https://github.com/\[github_id\]/\[module_name\]/issues"
"#;

/// Appended to `[project.urls]` when the manifest opts in to discussions.
const DISCUSSION_URL: &str =
    r#""Discussion" = "https://github.com/\[github_id\]/\[module_name\]/discussions"
"#;

/// Loop body for one classifier line.
const TOPIC_LINE: &str = "\"\\[topic\\]\",\n";

/// Loop body for one quoted dependency entry.
const DEPENDENCY_LINE: &str = "\"\\[dependency\\]\",\n";

/// Loop body for one bare requirement specifier.
const REQUIREMENT_LINE: &str = "\\[dependency\\]\n";

/// Host template for the conda environment bootstrap script.
const SETUP_ENV: &str = r#"\[shebang\]

read -p "Please enter the Python version you want to use (e.g., 3.9): " PYTHON_VERSION

conda create --name \[module_name\] python=$PYTHON_VERSION -y

conda activate \[module_name\]

export MODULE_NAME=\[module_name\]

pip install -r requirements.txt
"#;

/// The skeleton package init file.
const INIT_PY: &str = "# Init file for the module\n";

// ── Public API ────────────────────────────────────────────────────────────────

/// The built-in file set: build configuration, dependency list, environment
/// script, and source skeleton.
pub fn builtin() -> Vec<FileBlueprint> {
    vec![
        pyproject(),
        requirements(),
        setup_env(),
        skeleton_init(),
    ]
}

/// `pyproject.toml` on its own — also used by `sprout preview`.
pub fn pyproject() -> FileBlueprint {
    FileBlueprint::new("pyproject.toml", PYPROJECT)
        .with_block(BlockBlueprint::new("topics", TOPIC_LINE, "topic"))
        .with_block(BlockBlueprint::new(
            "dependencies",
            DEPENDENCY_LINE,
            "dependency",
        ))
        .with_optional_section(OptionalSection::new("discussion", DISCUSSION_URL))
}

/// `requirements.txt`: one requirement specifier per line.
pub fn requirements() -> FileBlueprint {
    FileBlueprint::new("requirements.txt", "\\{dependencies\\}").with_block(BlockBlueprint::new(
        "dependencies",
        REQUIREMENT_LINE,
        "dependency",
    ))
}

/// `scripts/setup_env.sh`, marked executable.
pub fn setup_env() -> FileBlueprint {
    FileBlueprint::new("scripts/setup_env.sh", SETUP_ENV).executable()
}

/// The namespaced package skeleton. The path itself is a template: hyphens
/// in the namespace become nested directories, hyphens in the module name
/// become underscores.
pub fn skeleton_init() -> FileBlueprint {
    FileBlueprint::new(
        "src/\\[namespace_path\\]/\\[module_dir\\]/__init__.py",
        INIT_PY,
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
