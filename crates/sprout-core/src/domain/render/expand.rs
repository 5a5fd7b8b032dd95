//! Loop Expander: render a sub-template once per list element.

use crate::domain::bindings::{Bindings, Element};
use crate::domain::error::DomainError;
use crate::domain::render::substitute::substitute;

/// Render `body` once per element of `elements`, in order, and concatenate.
///
/// Each element's fields become the scalar bindings for that rendering: a
/// `Record` element exposes its named fields, a `Scalar` element exposes one
/// implicit field named `list_name`. Duplicate elements produce duplicate
/// blocks — no reordering, no deduplication.
///
/// An empty `elements` slice yields the empty string (not an error), which
/// the Composer later treats as "delete the anchor".
///
/// # Errors
///
/// `UnboundPlaceholder` (from the Substitutor) if `body` references a field
/// the current element does not carry.
pub fn expand_loop(
    body: &str,
    list_name: &str,
    elements: &[Element],
) -> Result<String, DomainError> {
    let mut out = String::new();

    for element in elements {
        let bindings = element_bindings(list_name, element);
        out.push_str(&substitute(body, &bindings)?);
    }

    Ok(out)
}

fn element_bindings(list_name: &str, element: &Element) -> Bindings {
    match element {
        Element::Scalar(value) => Bindings::new().with(list_name, value.clone()),
        Element::Record(fields) => fields
            .iter()
            .fold(Bindings::new(), |b, (k, v)| b.with(k.clone(), v.clone())),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
