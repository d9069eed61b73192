//! # Query Sources
//!
//! [`QuerySource`] abstracts "something rows can be fetched from": a bare
//! table and a pre-filtered query both implement it. [`fetch_or_not_found`]
//! layers the exactly-one contract on top, surfacing zero matches as
//! [`ModelError::NotFound`] for the web layer to translate.

use tracing::debug;

use crate::error::ModelError;
use crate::record::Record;

/// A source of records that can be narrowed by a predicate.
///
/// Implementations decide how rows are produced (cloned from memory, mapped
/// from a driver, ...) and may pre-apply their own filters before the
/// predicate runs.
pub trait QuerySource {
    type Record: Record;

    /// Returns every record matching `predicate`, in source order.
    fn fetch_where(&self, predicate: &dyn Fn(&Self::Record) -> bool) -> Vec<Self::Record>;
}

/// Fetches exactly one record matching `predicate` from `source`.
///
/// When several rows match, the first is returned; callers needing stricter
/// cardinality should narrow the predicate.
///
/// # Errors
/// Returns [`ModelError::NotFound`] when no row matches.
pub fn fetch_or_not_found<S>(
    source: &S,
    predicate: impl Fn(&S::Record) -> bool,
) -> Result<S::Record, ModelError>
where
    S: QuerySource,
{
    let mut matches = source.fetch_where(&predicate);
    debug!(matches = matches.len(), "fetched records");

    if matches.is_empty() {
        return Err(ModelError::NotFound {
            message: "no record matched the predicate".into(),
            context: None,
        });
    }
    Ok(matches.swap_remove(0))
}
