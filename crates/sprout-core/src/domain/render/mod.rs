//! The template rendering engine.
//!
//! Three pure components, leaves first:
//!
//! 1. [`substitute`] — scalar placeholder substitution (`\[name\]`).
//! 2. [`expand_loop`] — list-driven block repetition over a sub-template.
//! 3. [`compose`] — indentation-preserving insertion of rendered blocks at
//!    `\{name\}` anchors in a host template.
//!
//! [`render_document`] ties them together in the canonical order: scalar
//! pass over the host, loop expansion per anchor, one compose. All three
//! stages are side-effect-free transformations over immutable inputs; loop
//! expansion for distinct anchors is independent and could run in any order.

pub mod compose;
pub mod expand;
pub mod substitute;

pub use compose::compose;
pub use expand::expand_loop;
pub use substitute::substitute;

use std::collections::HashMap;

use tracing::debug;

use crate::domain::bindings::Bindings;
use crate::domain::error::DomainError;

/// One loop-driven block: the anchor it fills, the sub-template rendered per
/// element, and the name of the bound list feeding it.
#[derive(Debug, Clone, Copy)]
pub struct LoopBlock<'a> {
    pub anchor: &'a str,
    pub body: &'a str,
    pub list: &'a str,
}

/// Render a complete document.
///
/// Composition order: (1) substitute host-level scalars; (2) expand each
/// loop block from its bound list; (3) compose host and blocks. Rendering
/// either fully succeeds or fails without emitting a truncated result.
///
/// # Errors
///
/// - `UnboundPlaceholder` — host or a loop body references a missing
///   binding, or a loop names a list that was never bound.
/// - `UnboundAnchor` / `UnknownAnchor` — anchor/block mismatch (see
///   [`compose`]).
pub fn render_document(
    host: &str,
    bindings: &Bindings,
    loops: &[LoopBlock<'_>],
) -> Result<String, DomainError> {
    let scalars_done = substitute(host, bindings)?;

    let mut blocks = HashMap::with_capacity(loops.len());
    for lp in loops {
        let elements = bindings
            .list(lp.list)
            .ok_or_else(|| DomainError::UnboundPlaceholder {
                name: lp.list.into(),
            })?;
        let rendered = expand_loop(lp.body, lp.list, elements)?;
        debug!(
            anchor = lp.anchor,
            elements = elements.len(),
            "loop block expanded"
        );
        blocks.insert(lp.anchor.to_string(), rendered);
    }

    compose(&scalars_done, &blocks)
}

// ── tests ─────────────────────────────────────────────────────────────────────
