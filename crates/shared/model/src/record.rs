//! # Record Contract
//!
//! The [`Record`] trait is the seam between rowbind and the external
//! data-access layer. A record exposes a kind tag, an identifier, named field
//! access, and its full field list; persistence and lifecycle stay on the
//! other side of the seam.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ModelError;
use crate::value::FieldValue;

/// One persisted row, accessed through an explicit capability interface.
///
/// Implementations are provided by the data-access layer. `get_field` and
/// `set_field` must reject unknown names with [`ModelError::UnknownField`];
/// rowbind relies on that for its fail-fast deserialization policy.
pub trait Record: fmt::Debug + Send + Sync {
    /// Stable type tag used to look up [`FieldSpec`](crate::FieldSpec) entries.
    fn kind(&self) -> &'static str;

    /// The record's primary identifier.
    fn id(&self) -> FieldValue;

    /// Every field name this record kind carries, in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Reads a named field.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownField`] when `name` does not exist on
    /// this kind.
    fn get_field(&self, name: &str) -> Result<FieldValue, ModelError>;

    /// Writes a named field.
    ///
    /// # Errors
    /// Returns [`ModelError::UnknownField`] when `name` does not exist on
    /// this kind, or any collaborator error for a value the field rejects.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ModelError>;
}

/// Flattens every field of `record` into a map of raw [`FieldValue`]s.
///
/// Temporal values stay typed; they are not formatted here. A field holding a
/// record reference is collapsed to its identifier when `expand_level` is 0,
/// or recursively flattened into a nested [`FieldValue::Map`] otherwise,
/// decrementing the level at each step.
///
/// # Errors
/// Propagates any [`ModelError`] raised while reading fields.
pub fn record_to_map(
    record: &dyn Record,
    expand_level: u32,
) -> Result<BTreeMap<String, FieldValue>, ModelError> {
    let mut map = BTreeMap::new();

    for name in record.field_names() {
        let value = match record.get_field(name)? {
            FieldValue::Record(inner) => {
                if expand_level > 0 {
                    FieldValue::Map(record_to_map(inner.as_ref(), expand_level - 1)?)
                } else {
                    inner.id()
                }
            }
            other => other,
        };
        map.insert((*name).to_owned(), value);
    }

    Ok(map)
}
