//! `traffic-gateway` — concurrent query/update surface over a shared road map.
//!
//! # What lives here
//!
//! | Module        | Contents                                           |
//! |---------------|----------------------------------------------------|
//! | [`gateway`]   | `RouteGateway` (locking, label resolution, logging)|
//! | [`itinerary`] | `Itinerary`, `EdgeListing` (label-level results)   |
//!
//! The gateway speaks **labels** at its boundary: callers pass location
//! names and get names back, never ids.  Everything id-shaped stays behind
//! the lock.

pub mod gateway;
pub mod itinerary;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use gateway::RouteGateway;
pub use itinerary::{EdgeListing, Itinerary};
