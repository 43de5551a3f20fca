//! `traffic-route` — shortest-path routing over road maps.
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`route`]  | `Route` (ordered stops plus total travel time)        |
//! | [`router`] | `Router` trait, default `DijkstraRouter`              |
//!
//! Routing is read-only: a [`Router`] borrows a
//! [`RoadMap`](traffic_graph::RoadMap) for the duration of one query and
//! never mutates it.  Unreachable destinations are reported as `None`, not
//! as errors — a disconnected map is a valid map.

pub mod route;
pub mod router;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use route::Route;
pub use router::{DijkstraRouter, Router};
