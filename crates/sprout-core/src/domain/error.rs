// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may retry with corrected input)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Rendering errors are deterministic functions of (template, bindings) and
/// are raised at the point of first reference — a failed render produces no
/// partial output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Rendering Errors
    // ========================================================================
    /// A template references a placeholder name with no binding.
    #[error("unbound placeholder '\\[{name}\\]'")]
    UnboundPlaceholder { name: String },

    /// A block was supplied for an anchor the host template does not contain.
    #[error("unknown anchor '{name}': host template has no '\\{{{name}\\}}' token")]
    UnknownAnchor { name: String },

    /// The host template contains an anchor no block was supplied for.
    #[error("unbound anchor '\\{{{name}\\}}': no rendered block supplied")]
    UnboundAnchor { name: String },

    // ========================================================================
    // Manifest Validation Errors
    // ========================================================================
    #[error("invalid manifest field '{field}': {reason}")]
    InvalidManifest { field: &'static str, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Structure Errors
    // ========================================================================
    #[error("Invalid blueprint: {0}")]
    InvalidBlueprint(String),

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnboundPlaceholder { name } => vec![
                format!(
                    "The template references '\\[{}\\]' but no value was bound",
                    name
                ),
                "Add the missing field to your manifest".into(),
                "Check the spelling of the placeholder name".into(),
            ],
            Self::UnknownAnchor { name } => vec![
                format!(
                    "A block named '{}' was rendered but the host has no matching anchor",
                    name
                ),
                "Remove the block, or add the anchor to the host template".into(),
            ],
            Self::UnboundAnchor { name } => vec![
                format!("The host expects a block for anchor '{}'", name),
                "Bind a list for this anchor, or remove the anchor from the host".into(),
            ],
            Self::InvalidManifest { field, reason } => vec![
                format!("Field '{}' is invalid: {}", field, reason),
                "Edit your sprout.toml and try again".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two generated files resolve to the same path: {}", path),
                "Check namespace and module name for collisions".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnboundPlaceholder { .. }
            | Self::UnknownAnchor { .. }
            | Self::UnboundAnchor { .. } => ErrorCategory::Rendering,
            Self::InvalidManifest { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidBlueprint(_)
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Rendering,
    Internal,
}
