//! Indentation-Preserving Composer: splice rendered blocks into a host.
//!
//! The host carries `\{name\}` anchor tokens, each of which is replaced by a
//! pre-rendered multi-line block. The tricky part is indentation fidelity: a
//! block generated at column zero must land at whatever column its anchor
//! occupies, line for line, so nested list-like content aligns visually with
//! its container. A naive string-replace would leave every continuation line
//! flush left.

use std::collections::{HashMap, HashSet};

use crate::domain::error::DomainError;
use crate::domain::template::{Segment, TokenKind, segments};

/// Replace every anchor in `host` with its block, re-indenting continuation
/// lines to the anchor's column.
///
/// For each anchor the indentation is the run of leading whitespace on the
/// anchor's line, truncated at the anchor's column. The first block line
/// replaces the token in place (text before and after the anchor on that
/// host line is preserved exactly); every subsequent non-empty block line is
/// prefixed with exactly that whitespace. Empty block lines stay empty so an
/// indented anchor never manufactures trailing-whitespace lines.
///
/// An empty block deletes the anchor token, collapsing the host line to its
/// surrounding text.
///
/// Matching is strict in both directions:
///
/// # Errors
///
/// - `UnboundAnchor` — the host contains an anchor with no entry in `blocks`
///   (raised at the first such anchor, left to right).
/// - `UnknownAnchor` — `blocks` contains a name that matches no anchor in
///   the host.
pub fn compose(host: &str, blocks: &HashMap<String, String>) -> Result<String, DomainError> {
    let mut out = String::with_capacity(host.len());
    let mut seen: HashSet<&str> = HashSet::new();
    // Byte offset in `out` where the current output line starts; continuation
    // lines of a spliced block inherit the whitespace run measured from here.
    let mut line_start = 0;

    for segment in segments(host) {
        match segment {
            Segment::Text(text) => {
                for (i, piece) in text.split('\n').enumerate() {
                    if i > 0 {
                        out.push('\n');
                        line_start = out.len();
                    }
                    out.push_str(piece);
                }
            }
            Segment::Token {
                kind: TokenKind::Anchor,
                name,
            } => {
                let block = blocks
                    .get(name)
                    .ok_or_else(|| DomainError::UnboundAnchor { name: name.into() })?;
                seen.insert(name);

                let indent = leading_whitespace(&out[line_start..]);
                for (i, line) in block.split('\n').enumerate() {
                    if i > 0 {
                        out.push('\n');
                        line_start = out.len();
                        if !line.is_empty() {
                            out.push_str(&indent);
                        }
                    }
                    out.push_str(line);
                }
            }
            // Scalar tokens are none of our business at this stage; the host
            // reaching the Composer should already be scalar-substituted, but
            // leftover tokens are passed through rather than mangled.
            Segment::Token {
                kind: TokenKind::Scalar,
                name,
            } => {
                out.push_str(r"\[");
                out.push_str(name);
                out.push_str(r"\]");
            }
        }
    }

    // Strict the other way round: every supplied block must have been used.
    // Sorted so the reported name is deterministic when several miss.
    let mut unknown: Vec<&str> = blocks
        .keys()
        .map(String::as_str)
        .filter(|k| !seen.contains(k))
        .collect();
    unknown.sort_unstable();
    if let Some(name) = unknown.first() {
        return Err(DomainError::UnknownAnchor {
            name: (*name).to_string(),
        });
    }

    Ok(out)
}

/// The run of whitespace at the start of the (partial) line, i.e. up to the
/// anchor's column when called at token time.
fn leading_whitespace(line: &str) -> String {
    line.chars().take_while(|c| c.is_whitespace()).collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────
