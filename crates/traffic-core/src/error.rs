//! Engine error type.
//!
//! `GraphError` covers everything a routing query or congestion update can
//! reject.  Sub-crates with richer failure modes (topology construction,
//! CSV loading) define their own enums and wrap `GraphError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `traffic-core` and a common base for
/// sub-crates.
///
/// Variants carry location labels rather than ids so messages stay readable
/// at the API boundary, where callers speak in labels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown location {label:?}")]
    UnknownVertex { label: String },

    #[error("no direct road between {from:?} and {to:?}")]
    NoSuchEdge { from: String, to: String },

    #[error("invalid travel time {minutes}: weights must be 1..=100 minutes")]
    InvalidWeight { minutes: u32 },
}

/// Shorthand result type for all `traffic-*` crates.
pub type GraphResult<T> = Result<T, GraphError>;
