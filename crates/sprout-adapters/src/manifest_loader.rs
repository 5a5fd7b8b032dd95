//! Manifest file loading.
//!
//! A manifest file is a TOML rendition of [`PackageManifest`]:
//!
//! ```toml
//! name_space = "crimson"
//! module_name = "package-name"
//! version = "0.1.0"
//! description = "Your package description."
//! author = "Sisung Kim"
//! email = "sisung.kim1@gmail.com"
//! github_id = "crimson206"
//! topics = ["Topic :: Software Development :: Libraries :: Python Modules"]
//! dependencies = ["crimson-intelli-type==0.4.0"]
//!
//! [options]
//! discussion = false
//! ```
//!
//! Loading only parses; semantic validation (`PackageManifest::validate`)
//! stays with the generate service so flag-built and file-built manifests go
//! through the same checks.

use std::path::Path;

use tracing::{debug, instrument};

use sprout_core::{
    application::ApplicationError,
    domain::PackageManifest,
    error::{SproutError, SproutResult},
};

/// Read and parse a manifest file.
///
/// # Errors
///
/// `ApplicationError::ManifestLoad` when the file cannot be read or is not
/// valid TOML for a manifest. The TOML error message (with line/column) is
/// preserved in the reason.
#[instrument]
pub fn load_manifest(path: &Path) -> SproutResult<PackageManifest> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        SproutError::from(ApplicationError::ManifestLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    let manifest: PackageManifest = toml::from_str(&raw).map_err(|e| {
        SproutError::from(ApplicationError::ManifestLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    debug!(package = %manifest.package_name(), "manifest loaded");
    Ok(manifest)
}

// ── tests ─────────────────────────────────────────────────────────────────────
