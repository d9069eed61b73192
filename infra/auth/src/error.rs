//! # Auth Errors
//!
//! This module defines the [`AuthError`] enum for password hashing failures.

use std::borrow::Cow;

/// A specialized error enum for password hashing failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Hash text that does not follow the `scheme$salt$digest` layout.
    #[error("Invalid password hash{}: {message}", format_context(.context))]
    InvalidHash { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback, primarily OS entropy failures.
    #[error("Internal auth error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Extension trait attaching human-readable context to auth results.
pub trait AuthErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, AuthError>;
}

impl<T> AuthErrorExt<T> for Result<T, AuthError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                AuthError::InvalidHash { context: c, .. }
                | AuthError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
