//! Error taxonomy for the polygon engine.
//!
//! All errors are raised eagerly, before any mutation happens. Degenerate
//! geometry (empty polygon, single point, segment) is not an error: it is
//! reported through NaN sentinels on the derived quantities.

/// Errors raised by [`ConvexPolygon2`](crate::geom2::ConvexPolygon2) operations.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A vertex index outside `[0, len)`.
    #[error("vertex index {index} out of range (number of vertices: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A query was issued while the polygon was dirty. Call `update()` first.
    #[error("polygon is outdated: call update() before querying it")]
    Outdated,

    /// Bulk input of the wrong shape (odd coordinate count, short rows, ...).
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
}

impl PolygonError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, PolygonError>;
