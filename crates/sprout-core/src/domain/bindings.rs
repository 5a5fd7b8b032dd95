//! Bindings: the values supplied for one render pass.
//!
//! A `Bindings` maps placeholder names to either a scalar string or an
//! ordered list of elements. It is constructed once per render and never
//! mutated during rendering — transformations create new instances.
//!
//! Names unused by any placeholder are silently ignored (non-strict
//! matching); a placeholder with no matching binding is an error raised by
//! the rendering pass that first references it.

use std::collections::HashMap;

/// One element of a bound list.
///
/// A plain scalar is treated as a record with a single implicit field named
/// after the list itself, so `"crimson-intelli-type==0.4.0"` in a list bound
/// as `dependency` satisfies the loop-body placeholder `\[dependency\]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Scalar(String),
    Record(HashMap<String, String>),
}

impl Element {
    /// Look up a field on this element. `list_name` names the implicit field
    /// a scalar element carries.
    pub fn field(&self, list_name: &str, field: &str) -> Option<&str> {
        match self {
            Self::Scalar(value) => (field == list_name).then_some(value.as_str()),
            Self::Record(fields) => fields.get(field).map(String::as_str),
        }
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

/// Name → value mapping for a single render.
///
/// Using `HashMap` (not `BTreeMap`) because order doesn't matter for lookup
/// and rendering determinism comes from the template scan order, never from
/// binding iteration.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    scalars: HashMap<String, String>,
    lists: HashMap<String, Vec<Element>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a scalar value, consuming self and returning a new bindings set.
    ///
    /// Enables fluent construction:
    /// ```rust,ignore
    /// let bindings = Bindings::new()
    ///     .with("version", "0.1.0")
    ///     .with_list("dependency", deps);
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.scalars.insert(name.into(), value.into());
        self
    }

    /// Bind an ordered list of elements under a name.
    pub fn with_list(
        mut self,
        name: impl Into<String>,
        elements: impl IntoIterator<Item = Element>,
    ) -> Self {
        self.lists.insert(name.into(), elements.into_iter().collect());
        self
    }

    /// Get a scalar binding if it exists.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.scalars.get(name).map(String::as_str)
    }

    /// Get a list binding if it exists.
    pub fn list(&self, name: &str) -> Option<&[Element]> {
        self.lists.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty() && self.lists.is_empty()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_lookup() {
        let b = Bindings::new().with("name", "value");
        assert_eq!(b.scalar("name"), Some("value"));
        assert_eq!(b.scalar("other"), None);
    }

    #[test]
    fn list_lookup_preserves_order() {
        let b = Bindings::new().with_list("dep", [Element::from("a"), Element::from("b")]);
        let list = b.list("dep").unwrap();
        assert_eq!(list[0], Element::Scalar("a".into()));
        assert_eq!(list[1], Element::Scalar("b".into()));
    }

    #[test]
    fn scalar_element_implicit_field() {
        let e = Element::from("axum");
        assert_eq!(e.field("dep", "dep"), Some("axum"));
        assert_eq!(e.field("dep", "version"), None);
    }

    #[test]
    fn record_element_named_fields() {
        let e = Element::Record(HashMap::from([
            ("name".to_string(), "serde".to_string()),
            ("version".to_string(), "1.0".to_string()),
        ]));
        assert_eq!(e.field("dep", "name"), Some("serde"));
        assert_eq!(e.field("dep", "dep"), None);
    }
}
