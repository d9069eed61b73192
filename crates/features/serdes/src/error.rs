//! # Serdes Errors
//!
//! This module defines the [`SerdesError`] enum for reporting codec failures:
//! missing field-spec entries, malformed top-level input, JSON encode/parse
//! failures, and collaborator errors passed through from the model layer.

use rowbind_model::ModelError;
use std::borrow::Cow;

/// A specialized error enum for record codec failures.
#[derive(Debug, thiserror::Error)]
pub enum SerdesError {
    /// The field spec has no entry for the requested record kind.
    #[error("Missing field spec{}: {kind}", format_context(.context))]
    MissingSpec { kind: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Deserialization input whose top-level JSON value is not an object.
    #[error("Format error{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Failure while encoding to or parsing from JSON text.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Collaborator failure raised by the record, passed through unchanged.
    #[error("Model error{}: {source}", format_context(.context))]
    Model { source: ModelError, context: Option<Cow<'static, str>> },
}

/// Extension trait attaching human-readable context to codec results.
pub trait SerdesErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SerdesError>;
}

impl<T> SerdesErrorExt<T> for Result<T, SerdesError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                SerdesError::MissingSpec { context: c, .. }
                | SerdesError::Format { context: c, .. }
                | SerdesError::Json { context: c, .. }
                | SerdesError::Model { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> SerdesErrorExt<T> for Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SerdesError> {
        self.map_err(|source| SerdesError::Json { source, context: Some(context.into()) })
    }
}

impl From<serde_json::Error> for SerdesError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source, context: None }
    }
}

impl From<ModelError> for SerdesError {
    #[inline]
    fn from(source: ModelError) -> Self {
        Self::Model { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
