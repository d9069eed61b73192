//! # Record/JSON serialization
//!
//! This crate converts [`rowbind_model`] records to and from JSON.
//!
//! The [`ValueCodec`] handles single values: temporal values become
//! fixed-pattern strings, record references collapse to their identifier,
//! containers convert recursively, and everything else passes through
//! JSON-safe. The reverse direction sniffs strings against the same temporal
//! patterns and otherwise converts structurally.
//!
//! The [`RecordCodec`] handles whole records against a caller-supplied
//! [`FieldSpec`](rowbind_model::FieldSpec): serialization walks the spec'd
//! fields with an expansion depth bounding how many levels of referenced
//! records are inlined as nested objects rather than bare identifiers;
//! deserialization parses a JSON object and mutates (or constructs) a record.
//!
//! ## Example
//! ```rust
//! use rowbind_serdes::RecordCodec;
//! use rowbind_model::{FieldSpec, FieldValue, ModelError, Record};
//!
//! #[derive(Debug, Default)]
//! struct Note {
//!     id: i64,
//!     body: String,
//! }
//!
//! impl Record for Note {
//!     fn kind(&self) -> &'static str { "note" }
//!     fn id(&self) -> FieldValue { FieldValue::Int(self.id) }
//!     fn field_names(&self) -> &'static [&'static str] { &["id", "body"] }
//!     fn get_field(&self, name: &str) -> Result<FieldValue, ModelError> {
//!         match name {
//!             "id" => Ok(FieldValue::Int(self.id)),
//!             "body" => Ok(self.body.as_str().into()),
//!             _ => Err(ModelError::UnknownField { name: name.to_owned().into(), context: None }),
//!         }
//!     }
//!     fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ModelError> {
//!         match (name, value) {
//!             ("id", FieldValue::Int(v)) => Ok(self.id = v),
//!             ("body", FieldValue::Text(v)) => Ok(self.body = v),
//!             (other, _) => Err(ModelError::UnknownField { name: other.to_owned().into(), context: None }),
//!         }
//!     }
//! }
//!
//! # fn main() -> Result<(), rowbind_serdes::SerdesError> {
//! let codec = RecordCodec::new();
//! let spec = FieldSpec::new().with("note", ["id", "body"]);
//!
//! let note = Note { id: 7, body: "answer: 42".into() };
//! let json = codec.serialize_record(&note, &spec, 0)?;
//!
//! let restored: Note = codec.deserialize_new(&json)?;
//! assert_eq!(restored.id, 7);
//! # Ok(())
//! # }
//! ```

mod codec;
mod convert;
mod error;

pub use codec::RecordCodec;
pub use convert::{TemporalFormats, ValueCodec};
pub use error::{SerdesError, SerdesErrorExt};

pub mod prelude {
    pub use crate::codec::RecordCodec;
    pub use crate::convert::{TemporalFormats, ValueCodec};
    pub use crate::error::{SerdesError, SerdesErrorExt};
}
