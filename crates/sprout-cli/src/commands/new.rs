//! Implementation of the `sprout new` command.
//!
//! Responsibility: translate CLI arguments into a `PackageManifest`, call the
//! core generate service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use sprout_adapters::{LocalFilesystem, blueprints, load_manifest};
use sprout_core::{
    application::GenerateService,
    domain::{ManifestOptions, PackageManifest},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sprout new` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the package name / output path
/// 2. Assemble a `PackageManifest` (manifest file, or flags + config defaults)
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute generation via `GenerateService`
/// 6. Print next-steps guidance
#[instrument(skip_all, fields(package = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve package path
    let (module_name, project_path) = resolve_package_path(&args.name)?;
    validate_package_name(&module_name)?;

    // 2. Assemble manifest
    let manifest = build_manifest(&args, &module_name, &config)?;

    debug!(
        package = %manifest.package_name(),
        dependencies = manifest.dependencies.len(),
        topics = manifest.topics.len(),
        "Manifest assembled"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&manifest, &project_path, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Check for existing directory
    if project_path.exists() {
        if !args.force {
            return Err(CliError::ProjectExists { path: project_path });
        }
        // --force is explicitly destructive: clear the way for a fresh run.
        std::fs::remove_dir_all(&project_path).map_err(|e| CliError::IoError {
            message: format!("failed to remove existing '{}'", project_path.display()),
            source: e,
        })?;
    }

    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let blueprints = blueprints::builtin();

    // 5. Dry run: render but do not write.
    if args.dry_run {
        let structure = service
            .plan(&manifest, &blueprints, &project_path)
            .map_err(CliError::Core)?;
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            manifest.package_name(),
            project_path.display(),
        ))?;
        for file in structure.files() {
            output.print(&format!("  {}", file.path.display()))?;
        }
        return Ok(());
    }

    // 6. Generate
    output.header(&format!("Creating '{}'...", manifest.package_name()))?;
    info!(package = %manifest.package_name(), path = %project_path.display(), "Generation started");

    let report = service
        .generate(&manifest, &blueprints, &project_path)
        .map_err(CliError::Core)?;

    info!(package = %report.package_name, "Generation completed");

    // 7. Success + next steps
    output.success(&format!(
        "Package '{}' created ({} files)",
        report.package_name,
        report.files.len(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        output.print("  source scripts/setup_env.sh   # create the conda env")?;
        output.print("  # Start building!")?;
    }

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

pub fn resolve_package_path(name: &str) -> CliResult<(String, PathBuf)> {
    let path = Path::new(name);

    let module_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CliError::InvalidPackageName {
            name: name.into(),
            reason: "cannot extract valid package name".into(),
        })?
        .to_string();

    // Return the FULL path to the project directory, not just the parent
    Ok((module_name, path.to_path_buf()))
}

fn validate_package_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidPackageName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidPackageName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidPackageName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    Ok(())
}

// ── Manifest construction ─────────────────────────────────────────────────────

/// Build the manifest for this run.
///
/// A `--manifest` file wins wholesale; otherwise the manifest is assembled
/// from flags with identity fields defaulted from config. Semantic
/// validation happens in the core service, not here.
fn build_manifest(
    args: &NewArgs,
    module_name: &str,
    config: &AppConfig,
) -> CliResult<PackageManifest> {
    if let Some(path) = &args.manifest {
        return load_manifest(path).map_err(CliError::Core);
    }

    let namespace = args
        .namespace
        .clone()
        .or_else(|| config.defaults.namespace.clone())
        .ok_or_else(|| CliError::InvalidInput {
            message: "no namespace given: pass --namespace or set defaults.namespace in config"
                .into(),
            source: None,
        })?;

    Ok(PackageManifest {
        name_space: namespace,
        module_name: module_name.to_string(),
        version: args
            .package_version
            .clone()
            .unwrap_or_else(|| "0.1.0".into()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| "Your package description.".into()),
        author: config.defaults.author.clone(),
        email: config.defaults.email.clone(),
        github_id: config.defaults.github_id.clone(),
        python_requires: config.defaults.python_requires.clone(),
        topics: args.topics.clone(),
        dependencies: args.dependencies.clone(),
        options: ManifestOptions {
            discussion: args.discussion,
        },
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    manifest: &PackageManifest,
    project_path: &Path,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Package:      {}", manifest.package_name()))?;
    out.print(&format!("  Version:      {}", manifest.version))?;
    out.print(&format!(
        "  Author:       {} <{}>",
        manifest.author, manifest.email
    ))?;
    out.print(&format!("  GitHub:       {}", manifest.github_id))?;
    out.print(&format!(
        "  Dependencies: {}",
        if manifest.dependencies.is_empty() {
            "(none)".to_string()
        } else {
            manifest.dependencies.join(", ")
        }
    ))?;
    out.print(&format!("  Location:     {}", project_path.display()))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
