//! Placeholder Substitutor: resolve `\[name\]` tokens against scalar bindings.

use crate::domain::bindings::Bindings;
use crate::domain::error::DomainError;
use crate::domain::template::{Segment, TokenKind, segments};

/// Replace every scalar placeholder in `template` with its bound value.
///
/// Scans left-to-right in a single pass over the original template, so bound
/// values are inserted raw and never re-scanned — a value that happens to
/// contain token-shaped text survives verbatim (no recursive substitution).
/// Anchor tokens (`\{name\}`) and anything that does not form a valid scalar
/// token pass through unchanged.
///
/// # Errors
///
/// `UnboundPlaceholder` at the first scalar token whose name has no scalar
/// binding; no partially substituted text is returned.
pub fn substitute(template: &str, bindings: &Bindings) -> Result<String, DomainError> {
    let mut out = String::with_capacity(template.len());

    for segment in segments(template) {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Token {
                kind: TokenKind::Scalar,
                name,
            } => match bindings.scalar(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(DomainError::UnboundPlaceholder { name: name.into() });
                }
            },
            // Anchors are the Composer's business, not ours. The token text
            // is exactly `\{` + name + `\}`, so re-emitting it is lossless.
            Segment::Token {
                kind: TokenKind::Anchor,
                name,
            } => {
                out.push_str(r"\{");
                out.push_str(name);
                out.push_str(r"\}");
            }
        }
    }

    Ok(out)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let b = Bindings::new().with("unused", "x");
        assert_eq!(
            substitute("requires-python = \">=3.9\"", &b).unwrap(),
            "requires-python = \">=3.9\""
        );
    }

    #[test]
    fn single_scalar_is_replaced() {
        let b = Bindings::new().with("name", "world");
        assert_eq!(substitute(r"Hello \[name\]!", &b).unwrap(), "Hello world!");
    }

    #[test]
    fn repeated_scalar_is_replaced_everywhere() {
        let b = Bindings::new().with("id", "crimson");
        assert_eq!(
            substitute(r"github.com/\[id\]/\[id\]", &b).unwrap(),
            "github.com/crimson/crimson"
        );
    }

    #[test]
    fn unbound_placeholder_is_an_error_naming_it() {
        let err = substitute(r"Hello \[name\]!", &Bindings::new()).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnboundPlaceholder {
                name: "name".into()
            }
        );
    }

    #[test]
    fn error_before_partial_output() {
        // First token resolves, second does not — the call must fail, not
        // return half-substituted text.
        let b = Bindings::new().with("a", "1");
        assert!(substitute(r"\[a\] \[b\]", &b).is_err());
    }

    #[test]
    fn list_binding_does_not_satisfy_scalar_token() {
        let b = Bindings::new().with_list("deps", ["x".into()]);
        assert!(matches!(
            substitute(r"\[deps\]", &b),
            Err(DomainError::UnboundPlaceholder { .. })
        ));
    }

    #[test]
    fn anchors_pass_through_untouched() {
        let b = Bindings::new().with("version", "0.1.0");
        assert_eq!(
            substitute("v\\[version\\]\n\\{deps\\}\n", &b).unwrap(),
            "v0.1.0\n\\{deps\\}\n"
        );
    }

    #[test]
    fn near_miss_delimiters_pass_through() {
        let b = Bindings::new().with("name", "x");
        assert_eq!(
            substitute(r"[name] \name\ \[not a token\]", &b).unwrap(),
            r"[name] \name\ \[not a token\]"
        );
    }

    #[test]
    fn inserted_values_are_not_rescanned() {
        // A bound value containing token-shaped text must come out raw.
        let b = Bindings::new().with("a", r"\[b\]").with("b", "never");
        assert_eq!(substitute(r"\[a\]", &b).unwrap(), r"\[b\]");
    }

    #[test]
    fn idempotent_on_token_free_bound_values() {
        let b = Bindings::new().with("name", "plain");
        let once = substitute(r"x \[name\] y", &b).unwrap();
        let twice = substitute(&once, &b).unwrap();
        assert_eq!(once, twice);
    }
}
