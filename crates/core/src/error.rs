//! Error types for genvec

use thiserror::Error;

/// Main error type for genvec operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("too few points for a {kind}: got {got}, need at least {min}")]
    TooFewPoints {
        kind: &'static str,
        got: usize,
        min: usize,
    },

    #[error("polygon ring is not closed (first point differs from last)")]
    OpenRing,

    #[error("orientation undefined: all points are collinear")]
    CollinearPoints,

    #[error("duplicate feature id: {0}")]
    DuplicateId(String),

    #[error("no DAT row for feature id: {0}")]
    RowNotFound(String),

    #[error("collection has no attribute table")]
    NoAttributeTable,

    #[error("DAT row for {id} has {got} fields, table has {expected} columns")]
    FieldCountMismatch {
        id: String,
        expected: usize,
        got: usize,
    },

    #[error("attribute table out of sync: {features} features vs {rows} DAT rows")]
    TableSizeMismatch { features: usize, rows: usize },

    #[error("invalid extent: ({llx}, {lly}) - ({urx}, {ury})")]
    InvalidExtent {
        llx: f64,
        lly: f64,
        urx: f64,
        ury: f64,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for genvec operations
pub type Result<T> = std::result::Result<T, Error>;
