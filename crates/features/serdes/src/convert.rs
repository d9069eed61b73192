//! # Value Codec
//!
//! Converts single [`FieldValue`]s to JSON-safe [`serde_json::Value`]s and
//! back. The serialized form never contains a temporal value or a record
//! reference directly: temporal values become fixed-pattern strings and
//! record references become their identifier. The reverse direction sniffs
//! strings against the temporal patterns, first success wins, in the fixed
//! order datetime, date, time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};

use rowbind_model::FieldValue;

use crate::error::{SerdesError, SerdesErrorExt};

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";
pub(crate) const TIME_FMT: &str = "%H:%M:%S";
pub(crate) const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Immutable table of the three temporal patterns a codec uses.
///
/// Owned by the [`ValueCodec`] instead of living in global state; the
/// defaults are the fixed wire patterns, and custom tables can be supplied
/// through [`ValueCodec::with_formats`].
#[derive(Debug, Clone)]
pub struct TemporalFormats {
    pub datetime: &'static str,
    pub date: &'static str,
    pub time: &'static str,
}

impl Default for TemporalFormats {
    fn default() -> Self {
        Self { datetime: DATETIME_FMT, date: DATE_FMT, time: TIME_FMT }
    }
}

/// Recursive converter between [`FieldValue`] and JSON-safe values.
#[derive(Debug, Clone, Default)]
pub struct ValueCodec {
    formats: TemporalFormats,
}

impl ValueCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a codec around a custom temporal format table.
    #[must_use]
    pub const fn with_formats(formats: TemporalFormats) -> Self {
        Self { formats }
    }

    /// The format table this codec serializes and sniffs with.
    #[must_use]
    pub const fn formats(&self) -> &TemporalFormats {
        &self.formats
    }

    /// Converts a field value into a JSON-safe value.
    ///
    /// Maps and lists convert recursively with keys and order preserved,
    /// temporal values format against the codec's patterns, record
    /// references collapse to their serialized identifier, and scalars pass
    /// through. Idempotent over already-JSON-safe shapes; never fails.
    #[must_use]
    pub fn serialize(&self, value: &FieldValue) -> Value {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(v) => Value::Bool(*v),
            FieldValue::Int(v) => Value::Number((*v).into()),
            FieldValue::Float(v) => {
                serde_json::Number::from_f64(*v).map_or(Value::Null, Value::Number)
            }
            FieldValue::Text(v) => Value::String(v.clone()),
            FieldValue::DateTime(v) => Value::String(v.format(self.formats.datetime).to_string()),
            FieldValue::Date(v) => Value::String(v.format(self.formats.date).to_string()),
            FieldValue::Time(v) => Value::String(v.format(self.formats.time).to_string()),
            FieldValue::List(items) => {
                Value::Array(items.iter().map(|item| self.serialize(item)).collect())
            }
            FieldValue::Map(entries) => Value::Object(
                entries.iter().map(|(key, item)| (key.clone(), self.serialize(item))).collect(),
            ),
            FieldValue::Record(record) => self.serialize(&record.id()),
        }
    }

    /// Serializes any value and encodes it to JSON text.
    ///
    /// # Errors
    /// Returns [`SerdesError::Json`] when encoding fails.
    pub fn serialize_message(&self, value: &FieldValue) -> Result<String, SerdesError> {
        serde_json::to_string(&self.serialize(value)).context("Failed to encode message")
    }

    /// Converts a JSON value back into a field value.
    ///
    /// Top-level strings are sniffed against the temporal patterns (datetime,
    /// then date, then time; first success wins) and fall back to text.
    /// Containers convert structurally without sniffing nested strings,
    /// matching the top-level-only coercion of the wire contract.
    #[must_use]
    pub fn deserialize(&self, value: &Value) -> FieldValue {
        match value {
            Value::String(text) => self.deserialize_text(text),
            other => Self::from_json(other),
        }
    }

    fn deserialize_text(&self, text: &str) -> FieldValue {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, self.formats.datetime) {
            return FieldValue::DateTime(datetime);
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, self.formats.date) {
            return FieldValue::Date(date);
        }
        if let Ok(time) = NaiveTime::parse_from_str(text, self.formats.time) {
            return FieldValue::Time(time);
        }
        FieldValue::Text(text.to_owned())
    }

    fn from_json(value: &Value) -> FieldValue {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(v) => FieldValue::Bool(*v),
            Value::Number(number) => number
                .as_i64()
                .map(FieldValue::Int)
                .or_else(|| number.as_f64().map(FieldValue::Float))
                .unwrap_or(FieldValue::Null),
            Value::String(text) => FieldValue::Text(text.clone()),
            Value::Array(items) => FieldValue::List(items.iter().map(Self::from_json).collect()),
            Value::Object(entries) => FieldValue::Map(
                entries.iter().map(|(key, item)| (key.clone(), Self::from_json(item))).collect(),
            ),
        }
    }
}

/// Encodes an assembled field map to JSON text.
pub(crate) fn encode_map(map: Map<String, Value>) -> Result<String, SerdesError> {
    serde_json::to_string(&Value::Object(map)).context("Failed to encode record")
}
