//! `sprout init` — write a starter manifest file.
//!
//! The starter is a complete, valid manifest pre-filled with the identity
//! defaults from config; the user edits module name, description, topics and
//! dependencies and then runs `sprout new <name> --manifest sprout.toml`.

use sprout_core::domain::{ManifestOptions, PackageManifest};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create a starter `sprout.toml`.
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    output.info("Writing starter manifest...")?;

    // Bail early if the file already exists and --force was not given.
    if args.output.exists() && !args.force {
        output.warning(&format!(
            "Manifest already exists at {}  (use --force to overwrite)",
            args.output.display(),
        ))?;
        return Ok(());
    }

    let starter = starter_manifest(&config);
    let toml = toml::to_string_pretty(&starter).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise starter manifest: {e}"),
        source: Some(Box::new(e)),
    })?;

    // Ensure parent directory exists.
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("Failed to create directory '{}'", parent.display()),
                source: e,
            })?;
        }
    }

    std::fs::write(&args.output, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write manifest to '{}'", args.output.display()),
        source: e,
    })?;

    output.success(&format!("Manifest created at {}", args.output.display()))?;
    output.print("Edit it, then run: sprout new <name> --manifest sprout.toml")?;

    Ok(())
}

/// The editable starter, seeded from config identity defaults.
fn starter_manifest(config: &AppConfig) -> PackageManifest {
    PackageManifest {
        name_space: config
            .defaults
            .namespace
            .clone()
            .unwrap_or_else(|| "acme".into()),
        module_name: "package-name".into(),
        version: "0.1.0".into(),
        description: "Your package description.".into(),
        author: config.defaults.author.clone(),
        email: config.defaults.email.clone(),
        github_id: config.defaults.github_id.clone(),
        python_requires: config.defaults.python_requires.clone(),
        topics: vec!["Topic :: Software Development :: Libraries :: Python Modules".into()],
        dependencies: vec![],
        options: ManifestOptions::default(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_round_trips_through_toml() {
        let starter = starter_manifest(&AppConfig::default());
        let toml = toml::to_string_pretty(&starter).unwrap();
        let parsed: PackageManifest = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, starter);
    }

    #[test]
    fn starter_uses_config_identity() {
        let mut config = AppConfig::default();
        config.defaults.author = "Sisung Kim".into();
        config.defaults.namespace = Some("crimson".into());

        let starter = starter_manifest(&config);
        assert_eq!(starter.author, "Sisung Kim");
        assert_eq!(starter.name_space, "crimson");
    }
}
