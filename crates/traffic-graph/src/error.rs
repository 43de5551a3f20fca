//! Topology-construction error type.

use thiserror::Error;

use traffic_core::GraphError;

/// Errors produced when declaring or loading a road topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("duplicate location {label:?}")]
    DuplicateVertex { label: String },

    #[error("road from {label:?} to itself")]
    SelfLoop { label: String },

    #[error("duplicate road between {from:?} and {to:?}")]
    DuplicateEdge { from: String, to: String },

    #[error("invalid road definition: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
