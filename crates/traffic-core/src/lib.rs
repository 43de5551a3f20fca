//! `traffic-core` — foundational types for the traffic routing engine.
//!
//! This crate is a dependency of every other `traffic-*` crate.  It
//! intentionally has no `traffic-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `VertexId`, `EdgeId`                                  |
//! | [`weight`] | `Weight` (validated travel time in minutes)           |
//! | [`error`]  | `GraphError`, `GraphResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod weight;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GraphError, GraphResult};
pub use ids::{EdgeId, VertexId};
pub use weight::Weight;
