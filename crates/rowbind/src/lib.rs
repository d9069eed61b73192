//! Facade crate for rowbind record/JSON conversion.
//! Re-exports the model, serdes, and auth crates under one roof.
//! Keep this crate thin: it should compose other crates, not implement conversion logic.
//!
//! ## Usage
//! - Implement [`model::Record`] for your row types (or generate it from your
//!   data-access layer).
//! - Build a [`serdes::RecordCodec`] and a per-call [`model::FieldSpec`] to
//!   move records to and from JSON.
//! - Use [`auth::hash_password`]/[`auth::verify_password`] for credentials
//!   and [`model::fetch_or_not_found`] for exactly-one queries.

pub use rowbind_auth as auth;
pub use rowbind_model as model;
pub use rowbind_serdes as serdes;

pub mod prelude {
    pub use rowbind_auth::{AuthError, AuthErrorExt, hash_password, verify_password};
    pub use rowbind_model::{
        FieldSpec, FieldValue, ModelError, ModelErrorExt, QuerySource, Record,
        fetch_or_not_found, record_to_map,
    };
    pub use rowbind_serdes::{
        RecordCodec, SerdesError, SerdesErrorExt, TemporalFormats, ValueCodec,
    };
}
