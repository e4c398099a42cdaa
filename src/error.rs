//! Error taxonomy for the table transformations.

/// Errors surfaced by the transformation functions.
///
/// Every failure mode is explicit; none of the transforms propagate NaN or
/// silently skip undefined aggregates.
#[derive(thiserror::Error, Debug)]
pub enum AnalyticsError {
    #[error("input table has no rows")]
    EmptyInput,
    #[error("no rows have id_start matching reference id {0}")]
    UnknownReferenceId(i64),
    #[error("malformed day or time value: {0}")]
    MalformedTime(String),
    #[error("matrix is not square: {rows} row labels vs {cols} column labels")]
    NotSquare { rows: usize, cols: usize },
}
