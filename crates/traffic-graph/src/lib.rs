//! `traffic-graph` — mutable road-map store and topology construction.
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`store`]    | `RoadMap` (columnar edge table, congestion updates)   |
//! | [`topology`] | `Topology`, `RoadDef` (declarative map description)   |
//! | [`loader`]   | CSV topology loading                                  |
//! | [`error`]    | `TopologyError`, `TopologyResult`                     |
//!
//! A [`Topology`] is a plain declaration of locations and roads; calling
//! [`Topology::build`] validates it and produces the [`RoadMap`] the routing
//! crates operate on.

pub mod error;
pub mod loader;
pub mod store;
pub mod topology;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TopologyError, TopologyResult};
pub use loader::{load_topology_csv, load_topology_reader};
pub use store::RoadMap;
pub use topology::{RoadDef, Topology};
