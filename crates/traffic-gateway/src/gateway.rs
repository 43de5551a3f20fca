//! Concurrent query/update gateway.
//!
//! # Locking discipline
//!
//! The gateway wraps its [`RoadMap`] in one `RwLock`.  A routing query holds
//! a read guard for its whole span (resolve labels, run the router, map ids
//! back to labels), so every query sees exactly one weight configuration.
//! Updates take the write guard, touch one weight slot, and release.  Many
//! queries run in parallel; an update waits for in-flight queries and blocks
//! new ones until it lands.
//!
//! A poisoned lock (a panic while some guard was held) is recovered with
//! [`PoisonError::into_inner`]: the store upholds its invariants across
//! every public mutation, so the data behind the lock is still usable.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use traffic_core::{GraphResult, Weight};
use traffic_graph::{RoadMap, Topology, TopologyResult};
use traffic_route::{DijkstraRouter, Router};

use crate::itinerary::{EdgeListing, Itinerary};

/// Shared routing service over one road map.
///
/// `&RouteGateway` is `Send + Sync`; share it across scoped threads by
/// reference, or wrap it in an `Arc` for detached ones.
pub struct RouteGateway<R: Router = DijkstraRouter> {
    map:    RwLock<RoadMap>,
    router: R,
}

impl RouteGateway {
    /// Validate a topology and open a gateway over it with the default
    /// Dijkstra router.
    pub fn new(topology: &Topology) -> TopologyResult<Self> {
        Ok(Self::with_router(topology.build()?, DijkstraRouter))
    }
}

impl<R: Router> RouteGateway<R> {
    /// Open a gateway over an already-built map with a custom router.
    pub fn with_router(map: RoadMap, router: R) -> Self {
        RouteGateway { map: RwLock::new(map), router }
    }

    // ── Read operations ───────────────────────────────────────────────────

    /// All location labels in ascending order.
    pub fn locations(&self) -> Vec<String> {
        self.read_map().labels().to_vec()
    }

    /// Every road with its current travel time, in ascending label order.
    pub fn edges(&self) -> Vec<EdgeListing> {
        let map = self.read_map();
        map.edges()
            .map(|(a, b, weight)| EdgeListing {
                from:    map.label(a).to_owned(),
                to:      map.label(b).to_owned(),
                minutes: weight.minutes(),
            })
            .collect()
    }

    /// Cheapest route between two locations under the current weights.
    ///
    /// Returns `Ok(None)` when both labels exist but no chain of roads
    /// connects them.  Unknown labels are rejected with
    /// [`GraphError::UnknownVertex`](traffic_core::GraphError::UnknownVertex).
    pub fn query_route(&self, source: &str, destination: &str) -> GraphResult<Option<Itinerary>> {
        let map = self.read_map();
        let from = map.resolve(source)?;
        let to = map.resolve(destination)?;

        let found = self.router.shortest_path(&map, from, to).map(|route| Itinerary {
            stops: route.stops.iter().map(|&v| map.label(v).to_owned()).collect(),
            total_minutes: route.total_minutes,
        });
        drop(map);

        tracing::debug!(
            source,
            destination,
            total_minutes = found.as_ref().map(|i| i.total_minutes),
            "route query"
        );
        Ok(found)
    }

    // ── Congestion updates ────────────────────────────────────────────────

    /// Set the travel time of the road between two locations.
    ///
    /// Endpoint order does not matter.  `minutes` is validated before the
    /// write lock is taken, so a rejected update never blocks readers.
    pub fn update_weight(&self, from: &str, to: &str, minutes: u32) -> GraphResult<()> {
        let weight = Weight::new(minutes)?;

        let mut map = self.write_map();
        let u = map.resolve(from)?;
        let v = map.resolve(to)?;
        map.set_weight(u, v, weight)?;
        drop(map);

        tracing::info!(from, to, minutes, "travel time updated");
        Ok(())
    }

    /// Restore every road to the travel time the map was built with.
    pub fn reset_weights(&self) {
        self.write_map().reset_weights();
        tracing::info!("travel times reset to defaults");
    }

    // ── Lock helpers ──────────────────────────────────────────────────────

    fn read_map(&self) -> RwLockReadGuard<'_, RoadMap> {
        self.map.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_map(&self) -> RwLockWriteGuard<'_, RoadMap> {
        self.map.write().unwrap_or_else(PoisonError::into_inner)
    }
}
