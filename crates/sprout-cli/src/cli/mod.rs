//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} One-shot Python package bootstrap",
    long_about = "Sprout renders a pyproject.toml, a requirements list, an \
                  environment-setup script, and a source skeleton from one \
                  small declarative manifest.",
    after_help = "EXAMPLES:\n\
        \x20 sprout new my-package --namespace crimson --dep \"requests>=2.31\"\n\
        \x20 sprout new my-package --manifest sprout.toml --yes\n\
        \x20 sprout preview pyproject --manifest sprout.toml\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap a new package from a manifest.
    #[command(
        visible_alias = "n",
        about = "Bootstrap a new package",
        after_help = "EXAMPLES:\n\
            \x20 sprout new my-package --namespace acme --description \"A widget\"\n\
            \x20 sprout new my-package --dep \"requests>=2.31\" --dep \"rich>=13\"\n\
            \x20 sprout new my-package --manifest sprout.toml --yes"
    )]
    New(NewArgs),

    /// Render a generated file to stdout without writing anything.
    #[command(
        visible_alias = "p",
        about = "Preview generated files",
        after_help = "EXAMPLES:\n\
            \x20 sprout preview pyproject --manifest sprout.toml\n\
            \x20 sprout preview all --manifest sprout.toml\n\
            \x20 sprout preview requirements --manifest sprout.toml --format json"
    )]
    Preview(PreviewArgs),

    /// Write a starter manifest file.
    #[command(
        about = "Write a starter sprout.toml",
        after_help = "EXAMPLES:\n\
            \x20 sprout init            # ./sprout.toml\n\
            \x20 sprout init --force    # overwrite an existing one"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Sprout configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config get defaults.author\n\
            \x20 sprout config set defaults.github_id crimson206\n\
            \x20 sprout config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprout new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Package name or path.  A plain name creates `./name`; a path like
    /// `../foo` places the package one level up.  The leaf becomes the
    /// module name unless a manifest file says otherwise.
    #[arg(value_name = "NAME", help = "Package name or path")]
    pub name: String,

    /// Load the whole manifest from a TOML file instead of flags.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        help = "Manifest file (overrides the flags below)"
    )]
    pub manifest: Option<PathBuf>,

    /// Distribution namespace.
    #[arg(
        short = 'n',
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Distribution namespace (e.g. acme in acme-widget)"
    )]
    pub namespace: Option<String>,

    /// One-line package description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Package description"
    )]
    pub description: Option<String>,

    /// Package version.
    #[arg(
        long = "version",
        value_name = "X.Y.Z",
        help = "Initial version (default 0.1.0)"
    )]
    pub package_version: Option<String>,

    /// Dependency specifier (repeatable).
    #[arg(
        long = "dep",
        value_name = "SPECIFIER",
        action = clap::ArgAction::Append,
        help = "Add a dependency (repeatable)"
    )]
    pub dependencies: Vec<String>,

    /// Extra PyPI topic classifier (repeatable).
    #[arg(
        long = "topic",
        value_name = "CLASSIFIER",
        action = clap::ArgAction::Append,
        help = "Add a topic classifier (repeatable)"
    )]
    pub topics: Vec<String>,

    /// Add the Discussions URL to the project links.
    #[arg(long = "discussion", help = "Link the repository's discussions tab")]
    pub discussion: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── preview ───────────────────────────────────────────────────────────────────

/// Arguments for `sprout preview`.
#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Which generated file to render.
    #[arg(value_enum, default_value = "pyproject", help = "Target to render")]
    pub target: PreviewTarget,

    /// Manifest file to render from.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        default_value = "sprout.toml",
        help = "Manifest file"
    )]
    pub manifest: PathBuf,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub format: PreviewFormat,
}

/// The renderable targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewTarget {
    /// The build configuration file.
    Pyproject,
    /// The dependency list.
    Requirements,
    /// The environment-setup script.
    SetupEnv,
    /// Every generated file.
    All,
}

/// Output format for `preview`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PreviewFormat {
    /// Raw file content.
    Text,
    /// JSON object of path -> content.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the starter manifest.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "sprout.toml",
        help = "Manifest path to create"
    )]
    pub output: PathBuf,

    /// Overwrite an existing manifest file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing manifest")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
