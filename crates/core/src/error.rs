//! Domain error model.

use thiserror::Error;

/// Result type used by single-record lookups.
pub type BlogResult<T> = Result<T, BlogError>;

/// Domain failure signal for a single-record lookup.
///
/// A lookup yields exactly one record or exactly one of these variants.
/// Infrastructure failures (I/O, poisoned locks, database errors) are not
/// domain failures and are modelled by the storage layer instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogError {
    /// No record matches the requested identifier.
    #[error("blog not found")]
    NotFound,

    /// The record exists but the caller may not view it.
    #[error("not authorized to view blog")]
    NotAuthorized,
}

/// A value could not be used as a blog record (records must be JSON objects).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("blog record must be a JSON object, got {kind}")]
pub struct InvalidRecord {
    pub kind: &'static str,
}
