//! # Record Domain Types
//!
//! This crate contains the domain vocabulary shared by the rowbind workspace:
//! the [`FieldValue`] sum type, the [`Record`] collaborator contract, the
//! [`FieldSpec`] per-kind field allowlist, and the [`QuerySource`] seam with
//! its [`fetch_or_not_found`] helper.
//!
//! Keep it lean: no I/O, no JSON, no crypto—just data shapes and the traits
//! the external data-access layer plugs into. Records themselves are owned by
//! that layer; this crate only reads and mutates fields through the trait.

mod error;
mod query;
mod record;
mod spec;
mod value;

pub use error::{ModelError, ModelErrorExt};
pub use query::{QuerySource, fetch_or_not_found};
pub use record::{Record, record_to_map};
pub use spec::FieldSpec;
pub use value::FieldValue;

pub mod prelude {
    pub use crate::error::{ModelError, ModelErrorExt};
    pub use crate::query::{QuerySource, fetch_or_not_found};
    pub use crate::record::{Record, record_to_map};
    pub use crate::spec::FieldSpec;
    pub use crate::value::FieldValue;
}
