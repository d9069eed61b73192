//! # Field Specifications
//!
//! A [`FieldSpec`] is the caller-supplied allowlist of which fields to
//! include during serialization, keyed by record kind. It is passed per call
//! and never persisted; a kind without an entry is a lookup failure surfaced
//! by the object codec.

use std::collections::BTreeMap;

/// Per-kind allowlist of field names to serialize.
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    entries: BTreeMap<String, Vec<String>>,
}

impl FieldSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry registration.
    ///
    /// ```rust
    /// use rowbind_model::FieldSpec;
    ///
    /// let spec = FieldSpec::new()
    ///     .with("user", ["id", "username", "email"])
    ///     .with("message", ["user", "content", "pub_date"]);
    /// assert!(spec.fields("user").is_some());
    /// ```
    #[must_use]
    pub fn with<I, S>(mut self, kind: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(kind, fields);
        self
    }

    /// Registers (or replaces) the field list for `kind`.
    pub fn insert<I, S>(&mut self, kind: &str, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(kind.to_owned(), fields.into_iter().map(Into::into).collect());
    }

    /// Looks up the field list registered for `kind`, in registration order.
    #[must_use]
    pub fn fields(&self, kind: &str) -> Option<&[String]> {
        self.entries.get(kind).map(Vec::as_slice)
    }
}
