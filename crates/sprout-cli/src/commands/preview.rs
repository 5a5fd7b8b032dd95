//! `sprout preview` — render generated files to stdout without writing.
//!
//! Exercises exactly the same pure pipeline as `sprout new`
//! (`GenerateService::plan`), so what you see is byte-for-byte what a real
//! run would write.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::instrument;

use sprout_adapters::{LocalFilesystem, blueprints, load_manifest};
use sprout_core::application::GenerateService;

use crate::{
    cli::{PreviewArgs, PreviewFormat, PreviewTarget},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(target = ?args.target))]
pub fn execute(args: PreviewArgs, output: OutputManager) -> CliResult<()> {
    let manifest = load_manifest(&args.manifest).map_err(CliError::Core)?;

    let selected = match args.target {
        PreviewTarget::Pyproject => vec![blueprints::pyproject()],
        PreviewTarget::Requirements => vec![blueprints::requirements()],
        PreviewTarget::SetupEnv => vec![blueprints::setup_env()],
        PreviewTarget::All => blueprints::builtin(),
    };

    // plan() never touches the filesystem; the adapter is only here because
    // the service owns one.
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));
    let structure = service
        .plan(&manifest, &selected, Path::new("."))
        .map_err(CliError::Core)?;

    // BTreeMap keeps the JSON output deterministically ordered.
    let rendered: BTreeMap<String, String> = structure
        .files()
        .map(|f| (f.path.display().to_string(), f.content.clone()))
        .collect();

    match args.format {
        PreviewFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rendered).map_err(|e| CliError::InvalidInput {
                    message: format!("failed to serialise preview: {e}"),
                    source: Some(Box::new(e)),
                })?;
            println!("{json}");
        }
        PreviewFormat::Text => {
            let multiple = rendered.len() > 1;
            for (path, content) in &rendered {
                if multiple {
                    output.header(&format!("── {path} ──"))?;
                }
                // Raw content to stdout — pipeable into a file.
                print!("{content}");
                if multiple {
                    output.print("")?;
                }
            }
        }
    }

    Ok(())
}
