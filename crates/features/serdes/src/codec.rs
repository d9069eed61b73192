//! # Record Codec
//!
//! Serializes whole records against a caller-supplied field spec and applies
//! parsed JSON objects back onto records. Expansion depth bounds how many
//! levels of referenced records are inlined as nested objects; at depth 0 a
//! reference is always collapsed to its identifier.

use serde_json::{Map, Value};
use tracing::debug;

use rowbind_model::{FieldSpec, FieldValue, Record};

use crate::convert::{ValueCodec, encode_map};
use crate::error::{SerdesError, SerdesErrorExt};

/// Object codec pairing a [`ValueCodec`] with per-kind field specs.
///
/// Stateless between calls; holds only the immutable format table. Safe to
/// share across threads as long as the records themselves are.
#[derive(Debug, Clone, Default)]
pub struct RecordCodec {
    values: ValueCodec,
}

impl RecordCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record codec around a custom value codec.
    #[must_use]
    pub const fn with_value_codec(values: ValueCodec) -> Self {
        Self { values }
    }

    /// The value codec used for leaf conversion.
    #[must_use]
    pub const fn value_codec(&self) -> &ValueCodec {
        &self.values
    }

    /// Serializes `record` to JSON text.
    ///
    /// See [`RecordCodec::serialize_record_map`] for the field selection and
    /// expansion rules.
    ///
    /// # Errors
    /// Everything `serialize_record_map` raises, plus [`SerdesError::Json`]
    /// when encoding the assembled object fails.
    pub fn serialize_record(
        &self,
        record: &dyn Record,
        spec: &FieldSpec,
        expand: u32,
    ) -> Result<String, SerdesError> {
        let map = self.serialize_record_map(record, spec, expand)?;
        encode_map(map)
    }

    /// Serializes `record` into a JSON object, without encoding to text.
    ///
    /// The field list comes from the spec entry for `record.kind()`. A field
    /// holding a record reference is expanded into a nested object while
    /// `expand > 0` (the referenced kind must have its own spec entry),
    /// decrementing the depth at each level; otherwise the reference
    /// collapses to its identifier through the value codec.
    ///
    /// # Errors
    /// Returns [`SerdesError::MissingSpec`] when the spec has no entry for a
    /// required kind, and passes through any [`SerdesError::Model`] raised
    /// while reading fields.
    pub fn serialize_record_map(
        &self,
        record: &dyn Record,
        spec: &FieldSpec,
        expand: u32,
    ) -> Result<Map<String, Value>, SerdesError> {
        let kind = record.kind();
        let fields = spec
            .fields(kind)
            .ok_or_else(|| SerdesError::MissingSpec { kind: kind.into(), context: None })?;
        debug!(kind, fields = fields.len(), expand, "serializing record");

        let mut out = Map::new();
        for name in fields {
            let json = match record.get_field(name)? {
                FieldValue::Record(inner) if expand > 0 => {
                    Value::Object(self.serialize_record_map(inner.as_ref(), spec, expand - 1)?)
                }
                other => self.values.serialize(&other),
            };
            out.insert(name.clone(), json);
        }

        Ok(out)
    }

    /// Parses `text` as a JSON object and applies every key onto `record`.
    ///
    /// Each value goes through the value codec's temporal sniffing before
    /// being set. The identifier field, when present, is applied like any
    /// other, which is what enables upsert-by-id flows; persisting the
    /// mutated record stays the caller's responsibility. Keys that do not
    /// name a field on the record fail fast with the collaborator's
    /// [`rowbind_model::ModelError::UnknownField`].
    ///
    /// # Errors
    /// Returns [`SerdesError::Json`] when `text` is not valid JSON,
    /// [`SerdesError::Format`] when the top-level value is not an object,
    /// and passes through any [`SerdesError::Model`] raised by `set_field`.
    pub fn deserialize_into(&self, text: &str, record: &mut dyn Record) -> Result<(), SerdesError> {
        let parsed: Value = serde_json::from_str(text).context("Failed to parse record JSON")?;
        let Value::Object(entries) = parsed else {
            return Err(SerdesError::Format {
                message: "top-level JSON value is not an object".into(),
                context: None,
            });
        };
        debug!(kind = record.kind(), fields = entries.len(), "deserializing record");

        for (name, value) in &entries {
            record.set_field(name, self.values.deserialize(value))?;
        }
        Ok(())
    }

    /// Parses `text` as a JSON object into a freshly constructed record.
    ///
    /// # Errors
    /// Same conditions as [`RecordCodec::deserialize_into`].
    pub fn deserialize_new<R>(&self, text: &str) -> Result<R, SerdesError>
    where
        R: Record + Default + 'static,
    {
        let mut record = R::default();
        self.deserialize_into(text, &mut record)?;
        Ok(record)
    }
}
