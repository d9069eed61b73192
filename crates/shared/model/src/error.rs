//! # Model Errors
//!
//! This module defines the [`ModelError`] enum used throughout the rowbind
//! workspace for reporting collaborator failures: unknown field names,
//! empty query results, and internal fallbacks.

use std::borrow::Cow;

/// A specialized error enum for record-collaborator failures.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// A field name does not exist on the target record kind.
    ///
    /// Raised by `get_field`/`set_field` implementations and, through them,
    /// by the fail-fast unknown-key policy of the deserializer.
    #[error("Unknown field{}: {name}", format_context(.context))]
    UnknownField { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A query produced zero rows where exactly one was required.
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal model error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Extension trait attaching human-readable context to model results.
pub trait ModelErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ModelError>;
}

impl<T> ModelErrorExt<T> for Result<T, ModelError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ModelError::UnknownField { context: c, .. }
                | ModelError::NotFound { context: c, .. }
                | ModelError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<&'static str> for ModelError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for ModelError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
