//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `sprout-adapters` implement
//! these.
//!
//! Rendering itself is NOT a port: the template engine is pure domain logic
//! with no external dependency to abstract over. The only thing the
//! application needs from the world is a place to put the rendered files.

use crate::error::SproutResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::filesystem::LocalFilesystem` (production)
/// - `sprout_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Permissions are capability-based, not Unix-specific
/// - Async-ready (can be extended with async-trait later)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SproutResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> SproutResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SproutResult<()>;
}
