//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire bootstrap workflow:
//! 1. Validate the manifest
//! 2. Render every blueprint (pure - no I/O)
//! 3. Validate the resulting structure
//! 4. Write to filesystem
//!
//! Rendering is separated from I/O entirely: the whole project is rendered
//! and validated before the first byte hits disk, so a failed render never
//! leaves a partially written project.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        FileBlueprint, LoopBlock, PackageManifest, Permissions, ProjectStructure, RelativePath,
        render_document, substitute,
    },
    error::{SproutError, SproutResult},
};

/// Summary of one completed generation run, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub package_name: String,
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Main bootstrap service.
///
/// Orchestrates rendering and writing. Holds only the filesystem port;
/// blueprints and manifest are passed per call because they are per-run data,
/// not service configuration.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Render every blueprint into a validated [`ProjectStructure`].
    ///
    /// Pure with respect to the outside world - performs no I/O. Useful on
    /// its own for `--dry-run` and `preview`.
    #[instrument(skip_all, fields(package = %manifest.package_name()))]
    pub fn plan(
        &self,
        manifest: &PackageManifest,
        blueprints: &[FileBlueprint],
        output_root: &Path,
    ) -> SproutResult<ProjectStructure> {
        manifest.validate().map_err(SproutError::Domain)?;

        let bindings = manifest.bindings();
        let mut structure = ProjectStructure::new(output_root);

        for blueprint in blueprints {
            // A manifest with a hostile namespace must not be able to render
            // a path escaping the project root.
            let path = substitute(blueprint.path.as_str(), &bindings)
                .and_then(RelativePath::try_new)
                .map_err(SproutError::Domain)?;

            // Opt-in sections are appended to the host before the scalar
            // pass, so their own placeholders resolve like any other.
            let mut host = blueprint.content.as_str().to_string();
            for section in &blueprint.optional_sections {
                if manifest.option_enabled(section.flag) {
                    host.push_str(section.text);
                }
            }

            let loops: Vec<LoopBlock<'_>> = blueprint
                .blocks
                .iter()
                .map(|b| LoopBlock {
                    anchor: b.anchor,
                    body: b.body.as_str(),
                    list: b.list,
                })
                .collect();

            let content =
                render_document(&host, &bindings, &loops).map_err(SproutError::Domain)?;

            let perms = if blueprint.executable {
                Permissions::executable()
            } else {
                Permissions::read_write()
            };
            structure.add_file(path.into_path_buf(), content, perms);
        }

        structure.validate().map_err(SproutError::Domain)?;
        info!(files = structure.entry_count(), "project structure rendered");
        Ok(structure)
    }

    /// Bootstrap a new package: render, validate, then write.
    ///
    /// This is the main use case. Refuses to overwrite an existing project
    /// directory; on a write failure the partially written directory is
    /// rolled back.
    #[instrument(
        skip_all,
        fields(
            package = %manifest.package_name(),
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        manifest: &PackageManifest,
        blueprints: &[FileBlueprint],
        output_root: impl AsRef<Path>,
    ) -> SproutResult<GenerationReport> {
        let output_root = output_root.as_ref();

        // 1+2. Validate and render everything before touching the disk.
        let structure = self.plan(manifest, blueprints, output_root)?;

        // 3. Write, rolling back on failure.
        self.write_structure(&structure)?;

        info!("generation completed successfully");
        Ok(GenerationReport {
            package_name: manifest.package_name(),
            root: output_root.to_path_buf(),
            files: structure.files().map(|f| f.path.clone()).collect(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> SproutResult<()> {
        if self.filesystem.exists(&structure.root) {
            return Err(ApplicationError::ProjectExists {
                path: structure.root.clone(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&structure.root);
                Err(e)
            }
        }
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> SproutResult<()> {
        self.filesystem.create_dir_all(&structure.root)?;

        for entry in &structure.entries {
            match entry {
                crate::domain::FsEntry::Directory(dir) => {
                    let path = structure.root.join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                }
                crate::domain::FsEntry::File(file) => {
                    let path = structure.root.join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{BlockBlueprint, FileBlueprint, ManifestOptions, PackageManifest};

    fn manifest() -> PackageManifest {
        PackageManifest {
            name_space: "acme".into(),
            module_name: "widget".into(),
            version: "0.1.0".into(),
            description: "A widget.".into(),
            author: "Jo".into(),
            email: "jo@example.com".into(),
            github_id: "jo".into(),
            python_requires: ">=3.9".into(),
            topics: vec![],
            dependencies: vec!["left-pad==1.0.0".into()],
            options: ManifestOptions::default(),
        }
    }

    fn blueprints() -> Vec<FileBlueprint> {
        vec![
            FileBlueprint::new(
                "requirements.txt",
                "\\{dependencies\\}",
            )
            .with_block(BlockBlueprint::new(
                "dependencies",
                "\\[dependency\\]\n",
                "dependency",
            )),
            FileBlueprint::new("scripts/setup.sh", "\\[shebang\\]\n").executable(),
        ]
    }

    #[test]
    fn plan_renders_without_io() {
        let fs = MockFilesystem::new(); // no expectations: plan must not call it
        let service = GenerateService::new(Box::new(fs));

        let structure = service
            .plan(&manifest(), &blueprints(), Path::new("out"))
            .unwrap();

        assert_eq!(structure.entry_count(), 2);
        let req = structure
            .files()
            .find(|f| f.path.ends_with("requirements.txt"))
            .unwrap();
        assert_eq!(req.content, "left-pad==1.0.0\n");
    }

    #[test]
    fn plan_rejects_invalid_manifest() {
        let service = GenerateService::new(Box::new(MockFilesystem::new()));
        let mut bad = manifest();
        bad.email = "nope".into();

        assert!(service.plan(&bad, &blueprints(), Path::new("out")).is_err());
    }

    #[test]
    fn generate_refuses_existing_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        let service = GenerateService::new(Box::new(fs));

        let err = service
            .generate(&manifest(), &blueprints(), "out")
            .unwrap_err();
        assert!(matches!(
            err,
            SproutError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[test]
    fn generate_writes_files_and_marks_executables() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .times(2)
            .returning(|_, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|path, executable| path.ends_with("setup.sh") && *executable)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(Box::new(fs));
        let report = service
            .generate(&manifest(), &blueprints(), "out")
            .unwrap();

        assert_eq!(report.package_name, "acme-widget");
        assert_eq!(report.files.len(), 2);
    }

    #[test]
    fn generate_rolls_back_on_write_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|path| path == Path::new("out"))
            .times(1)
            .returning(|_| Ok(()));

        let service = GenerateService::new(Box::new(fs));
        assert!(service.generate(&manifest(), &blueprints(), "out").is_err());
    }
}
