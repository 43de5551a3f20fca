//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The gateway crate calls routing via the [`Router`] trait, so applications
//! can swap in custom implementations (A*, bidirectional search, precomputed
//! tables) without touching the store.  The default [`DijkstraRouter`] is
//! sufficient for city-scale maps.
//!
//! # Determinism
//!
//! The heap orders entries by `(cost, vertex id)`, and ids follow label
//! order, so among equal-cost frontier vertices the alphabetically smallest
//! label is visited first.  The same map state always yields the same route.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use traffic_core::VertexId;
use traffic_graph::RoadMap;

use crate::route::Route;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a gateway can serve routing
/// queries from many threads at once.
pub trait Router: Send + Sync {
    /// Compute a cheapest route from `from` to `to` over the current weights.
    ///
    /// Returns `None` if no path exists.  `from == to` is handled as a
    /// trivial single-stop route rather than `None`.
    fn shortest_path(&self, map: &RoadMap, from: VertexId, to: VertexId) -> Option<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the store's adjacency lists.
///
/// Weights are positive by construction, so the first time the destination
/// leaves the heap its cost is final and the search stops there.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_path(&self, map: &RoadMap, from: VertexId, to: VertexId) -> Option<Route> {
        dijkstra(map, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(map: &RoadMap, from: VertexId, to: VertexId) -> Option<Route> {
    if from == to {
        return Some(Route { stops: vec![from], total_minutes: 0 });
    }

    let n = map.vertex_count();
    // dist[v] = best known cost (minutes) to reach v.
    let mut dist = vec![u32::MAX; n];
    // prev[v] = vertex the best path reaches v from; INVALID for unreached.
    let mut prev = vec![VertexId::INVALID; n];

    dist[from.index()] = 0;

    // Min-heap: (cost, vertex). Reverse makes BinaryHeap (max) behave as min.
    // Secondary key VertexId breaks cost ties toward the smaller label.
    let mut heap: BinaryHeap<Reverse<(u32, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, vertex))) = heap.pop() {
        if vertex == to {
            return Some(reconstruct(prev, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for (neighbor, weight) in map.neighbors(vertex) {
            let new_cost = cost.saturating_add(weight.minutes());

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = vertex;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    None
}

fn reconstruct(prev: Vec<VertexId>, from: VertexId, to: VertexId, total_minutes: u32) -> Route {
    let mut stops = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        stops.push(cur);
    }
    stops.reverse();
    Route { stops, total_minutes }
}
