//! Sprout Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Sprout
//! package bootstrap generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           sprout-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sprout-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │      builtin blueprints, loaders)       │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (template engine, manifest, structure) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sprout_core::{
//!     application::GenerateService,
//!     domain::PackageManifest,
//! };
//!
//! // 1. Describe the package (usually loaded from sprout.toml)
//! let manifest: PackageManifest = load_manifest()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(filesystem);
//! service.generate(&manifest, &blueprints, "./my-package")?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GenerateService, GenerationReport, ports::Filesystem};
    pub use crate::domain::{
        Bindings, BlockBlueprint, Element, FileBlueprint, LoopBlock, ManifestOptions,
        OptionalSection, PackageManifest, ProjectStructure, Template, TemplateSource, compose,
        expand_loop, render_document, substitute,
    };
    pub use crate::error::{SproutError, SproutResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
