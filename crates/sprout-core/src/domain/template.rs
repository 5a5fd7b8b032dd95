//! Template value object and the placeholder token grammar.
//!
//! A template is an immutable string containing zero or more *tokens*. Two
//! token kinds exist, distinguished by their delimiter pairs:
//!
//! | Kind   | Syntax      | Resolves to                                |
//! |--------|-------------|--------------------------------------------|
//! | Scalar | `\[name\]`  | a single bound string value                |
//! | Anchor | `\{name\}`  | a multi-line block built by loop expansion |
//!
//! The backslash-bracket pairs were chosen because they cannot appear in the
//! legitimate content of the generated artifacts (TOML, shell, Python), so no
//! escaping convention is needed for ordinary text. `name` must match
//! `[A-Za-z_][A-Za-z0-9_]*`; any sequence that does not form a valid token —
//! bad name, missing closer, lone backslash — passes through as literal text.
//!
//! ## Why a shared scanner
//!
//! The Substitutor and the Composer both need to walk the same grammar (one
//! resolves scalars, the other anchors). Keeping a single tokenizer here
//! guarantees the two passes can never disagree about what counts as a token.

use std::fmt;

// ── Token grammar ─────────────────────────────────────────────────────────────

/// The two placeholder kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `\[name\]` — resolves to a scalar binding.
    Scalar,
    /// `\{name\}` — resolves to a rendered multi-line block.
    Anchor,
}

impl TokenKind {
    const fn closer(self) -> &'static str {
        match self {
            Self::Scalar => r"\]",
            Self::Anchor => r"\}",
        }
    }
}

/// One lexical segment of a template: literal text or a valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'t> {
    Text(&'t str),
    Token { kind: TokenKind, name: &'t str },
}

/// Split a template into literal text and placeholder tokens.
///
/// Single left-to-right pass. Invalid token shapes are not errors: the
/// leading backslash is emitted as text and scanning resumes one byte later,
/// so near-miss sequences survive verbatim in the output.
pub(crate) fn segments(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut out = Vec::new();
    let mut text_start = 0; // start of the pending literal run
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            i += 1;
            continue;
        }

        let kind = match bytes[i + 1] {
            b'[' => TokenKind::Scalar,
            b'{' => TokenKind::Anchor,
            _ => {
                i += 1;
                continue;
            }
        };

        match parse_token(template, i, kind) {
            Some((name, end)) => {
                if text_start < i {
                    out.push(Segment::Text(&template[text_start..i]));
                }
                out.push(Segment::Token { kind, name });
                i = end;
                text_start = end;
            }
            None => i += 1,
        }
    }

    if text_start < template.len() {
        out.push(Segment::Text(&template[text_start..]));
    }
    out
}

/// Try to parse a token starting at the opener position. Returns the enclosed
/// name and the byte offset just past the closer.
fn parse_token(template: &str, open: usize, kind: TokenKind) -> Option<(&str, usize)> {
    let name_start = open + 2;
    let rel = template[name_start..].find(kind.closer())?;
    let name = &template[name_start..name_start + rel];
    is_valid_name(name).then_some((name, name_start + rel + 2))
}

/// Token names: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ── Template value object ─────────────────────────────────────────────────────

/// Source of template content: either compile-time or runtime.
///
/// `Static` references binary data (zero-cost) — the built-in blueprints are
/// all compile-time strings. `Owned` allocates for dynamic content such as a
/// host template with optional sections appended.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Compile-time string literal (e.g., `include_str!` or a `r"..."` const)
    Static(&'static str),

    /// Runtime-owned string (heap-allocated)
    Owned(String),
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

impl TemplateSource {
    /// Get string slice regardless of storage type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

/// An immutable template string plus token introspection.
///
/// Created fresh per render and discarded afterwards; no state crosses
/// renders.
#[derive(Debug, Clone)]
pub struct Template {
    source: TemplateSource,
}

impl Template {
    pub fn new(source: impl Into<TemplateSource>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.source.as_str()
    }

    /// Names of all scalar tokens, in order of first appearance, deduplicated.
    pub fn scalar_names(&self) -> Vec<&str> {
        self.names(TokenKind::Scalar)
    }

    /// Names of all anchor tokens, in order of first appearance, deduplicated.
    pub fn anchor_names(&self) -> Vec<&str> {
        self.names(TokenKind::Anchor)
    }

    /// Quick heuristic: does this template contain any token at all?
    pub fn contains_token(&self) -> bool {
        segments(self.as_str())
            .iter()
            .any(|s| matches!(s, Segment::Token { .. }))
    }

    fn names(&self, want: TokenKind) -> Vec<&str> {
        let mut seen = Vec::new();
        for segment in segments(self.as_str()) {
            if let Segment::Token { kind, name } = segment {
                if kind == want && !seen.contains(&name) {
                    seen.push(name);
                }
            }
        }
        seen
    }
}

impl From<&'static str> for Template {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Template {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn token_names(template: &str, want: TokenKind) -> Vec<&str> {
        segments(template)
            .into_iter()
            .filter_map(|s| match s {
                Segment::Token { kind, name } if kind == want => Some(name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn plain_text_is_one_segment() {
        let segs = segments("no tokens here");
        assert_eq!(segs, vec![Segment::Text("no tokens here")]);
    }

    #[test]
    fn scalar_token_is_recognised() {
        let segs = segments(r"Hello \[name\]!");
        assert_eq!(
            segs,
            vec![
                Segment::Text("Hello "),
                Segment::Token {
                    kind: TokenKind::Scalar,
                    name: "name"
                },
                Segment::Text("!"),
            ]
        );
    }

    #[test]
    fn anchor_token_is_recognised() {
        assert_eq!(token_names(r"\{deps\}", TokenKind::Anchor), vec!["deps"]);
    }

    #[test]
    fn adjacent_tokens_have_no_text_between() {
        let segs = segments(r"\[a\]\[b\]");
        assert_eq!(segs.len(), 2);
    }

    #[test]
    fn invalid_name_passes_through_as_text() {
        // "1abc" is not a valid identifier; the whole sequence stays literal.
        let segs = segments(r"\[1abc\]");
        assert_eq!(segs, vec![Segment::Text(r"\[1abc\]")]);
    }

    #[test]
    fn missing_closer_passes_through_as_text() {
        let segs = segments(r"open \[name but never closed");
        assert_eq!(segs, vec![Segment::Text(r"open \[name but never closed")]);
    }

    #[test]
    fn lone_backslashes_and_brackets_are_literal() {
        let segs = segments(r"a \ b [plain] \n");
        assert_eq!(segs, vec![Segment::Text(r"a \ b [plain] \n")]);
    }

    #[test]
    fn empty_name_is_invalid() {
        assert_eq!(segments(r"\[\]"), vec![Segment::Text(r"\[\]")]);
    }

    #[test]
    fn mixed_kinds_scan_independently() {
        let t = Template::new(r"\[version\] and \{deps\} and \[version\]");
        assert_eq!(t.scalar_names(), vec!["version"]);
        assert_eq!(t.anchor_names(), vec!["deps"]);
        assert!(t.contains_token());
    }

    #[test]
    fn underscore_names_are_valid() {
        assert_eq!(
            token_names(r"\[_private\] \[snake_case_2\]", TokenKind::Scalar),
            vec!["_private", "snake_case_2"]
        );
    }

    #[test]
    fn scalar_closer_does_not_close_anchor() {
        // An anchor opener with a scalar closer is not a token.
        assert_eq!(segments(r"\{deps\]"), vec![Segment::Text(r"\{deps\]")]);
    }
}
