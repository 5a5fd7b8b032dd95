//! The package manifest: the declarative description a generation run
//! consumes.
//!
//! A manifest is constructed once (from CLI flags or a `sprout.toml` file),
//! validated, and passed by reference into every component call. It is never
//! mutated during rendering — derived values are computed on demand rather
//! than written back.

use serde::{Deserialize, Serialize};

use crate::domain::bindings::{Bindings, Element};
use crate::domain::error::DomainError;

/// Declarative description of the Python package to bootstrap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageManifest {
    /// Distribution namespace, e.g. `crimson` in `crimson-templator`.
    pub name_space: String,

    /// Module name within the namespace. Hyphens allowed; they become
    /// underscores in the source skeleton.
    pub module_name: String,

    /// Package version (dotted numeric triple).
    pub version: String,

    /// One-line package description.
    pub description: String,

    /// Author display name.
    pub author: String,

    /// Author contact email.
    pub email: String,

    /// GitHub account owning the repository, used for the project URLs.
    pub github_id: String,

    /// `requires-python` specifier.
    #[serde(default = "default_python_requires")]
    pub python_requires: String,

    /// Extra PyPI classifier strings (`Topic :: ...`).
    #[serde(default)]
    pub topics: Vec<String>,

    /// Requirement specifiers for the dependency list.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Opt-in extras.
    #[serde(default)]
    pub options: ManifestOptions,
}

/// Opt-in static sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ManifestOptions {
    /// Add a "Discussion" URL pointing at the repository's discussions tab.
    #[serde(default)]
    pub discussion: bool,
}

fn default_python_requires() -> String {
    ">=3.9".to_string()
}

impl PackageManifest {
    /// Full distribution name: `{name_space}-{module_name}`.
    pub fn package_name(&self) -> String {
        format!("{}-{}", self.name_space, self.module_name)
    }

    /// Namespace as a directory path: hyphens become nested directories.
    pub fn namespace_path(&self) -> String {
        self.name_space.replace('-', "/")
    }

    /// Module directory name: hyphens become underscores (importable).
    pub fn module_dir(&self) -> String {
        self.module_name.replace('-', "_")
    }

    /// Whether the named opt-in section is enabled.
    pub fn option_enabled(&self, flag: &str) -> bool {
        match flag {
            "discussion" => self.options.discussion,
            _ => false,
        }
    }

    /// Validate all invariants.
    ///
    /// Should be called before rendering; the generate service rejects
    /// invalid manifests up front so no blueprint is ever half-rendered
    /// against bad input.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name("name_space", &self.name_space)?;
        validate_name("module_name", &self.module_name)?;

        if self.version.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "version" });
        }
        let numeric_triple = self.version.split('.').count() == 3
            && self
                .version
                .split('.')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
        if !numeric_triple {
            return Err(DomainError::InvalidManifest {
                field: "version",
                reason: format!("'{}' is not a dotted numeric triple", self.version),
            });
        }

        if self.author.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "author" });
        }
        if !self.email.contains('@') {
            return Err(DomainError::InvalidManifest {
                field: "email",
                reason: format!("'{}' does not look like an email address", self.email),
            });
        }
        if self.github_id.is_empty() {
            return Err(DomainError::MissingRequiredField { field: "github_id" });
        }

        for (field, list) in [("topics", &self.topics), ("dependencies", &self.dependencies)] {
            if list.iter().any(|entry| entry.trim().is_empty()) {
                return Err(DomainError::InvalidManifest {
                    field,
                    reason: "empty entries are not allowed".into(),
                });
            }
        }

        Ok(())
    }

    /// Build the bindings for one render pass.
    ///
    /// Scalars cover the manifest fields plus the derived names; lists bind
    /// `topic` and `dependency` as ordered scalar elements. The mapping is a
    /// pure function of the manifest — rendering never reads the manifest
    /// directly.
    pub fn bindings(&self) -> Bindings {
        Bindings::new()
            .with("name_space", self.name_space.clone())
            .with("module_name", self.module_name.clone())
            .with("version", self.version.clone())
            .with("description", self.description.clone())
            .with("author", self.author.clone())
            .with("email", self.email.clone())
            .with("github_id", self.github_id.clone())
            .with("python_requires", self.python_requires.clone())
            .with("package_name", self.package_name())
            .with("namespace_path", self.namespace_path())
            .with("module_dir", self.module_dir())
            .with("shebang", "#!/usr/bin/env bash")
            .with_list("topic", self.topics.iter().map(|t| Element::from(t.clone())))
            .with_list(
                "dependency",
                self.dependencies.iter().map(|d| Element::from(d.clone())),
            )
    }
}

/// Namespace and module names: lowercase alphanumerics, `-`, `_`; must start
/// with a letter.
fn validate_name(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::MissingRequiredField { field });
    }
    let mut chars = value.chars();
    let first_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !(first_ok && rest_ok) {
        return Err(DomainError::InvalidManifest {
            field,
            reason: format!(
                "'{}' must start with a letter and contain only [a-z0-9-_]",
                value
            ),
        });
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
