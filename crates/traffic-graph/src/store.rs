//! Mutable road-map store.
//!
//! # Data layout
//!
//! Locations are interned in **ascending label order**, so comparing two
//! `VertexId`s compares their labels alphabetically.  Roads live in a
//! columnar edge table with one weight slot per undirected road:
//!
//! ```text
//! edge_a[e], edge_b[e]   endpoints, canonicalized so edge_a[e] < edge_b[e]
//! edge_weight[e]         current travel time
//! edge_default[e]        travel time the map was built with
//! ```
//!
//! A per-vertex adjacency list maps each endpoint to `(neighbor, EdgeId)`
//! pairs sorted by neighbor id.  Updating a weight touches exactly one slot,
//! so the travel time seen from either endpoint always agrees.

use rustc_hash::FxHashMap;

use traffic_core::{EdgeId, GraphError, GraphResult, VertexId, Weight};

/// Undirected weighted road map with label-addressed vertices.
///
/// Do not construct directly; use [`Topology::build`](crate::Topology::build)
/// or [`RoadMap::empty`].
#[derive(Debug, Clone)]
pub struct RoadMap {
    // ── Vertex data ───────────────────────────────────────────────────────
    /// Location labels in ascending order.  Indexed by `VertexId`.
    pub(crate) labels: Vec<String>,

    /// Label → id lookup, inverse of `labels`.
    pub(crate) index: FxHashMap<String, VertexId>,

    // ── Edge data (indexed by EdgeId = position in canonical order) ───────
    /// Lexicographically smaller endpoint of each road.
    pub(crate) edge_a: Vec<VertexId>,

    /// Lexicographically larger endpoint of each road.
    pub(crate) edge_b: Vec<VertexId>,

    /// Current travel time of each road.
    pub(crate) edge_weight: Vec<Weight>,

    /// Travel time each road was built with; restored by `reset_weights`.
    pub(crate) edge_default: Vec<Weight>,

    // ── Adjacency ─────────────────────────────────────────────────────────
    /// `(neighbor, edge)` pairs per vertex, sorted by neighbor id.
    pub(crate) adjacency: Vec<Vec<(VertexId, EdgeId)>>,
}

impl RoadMap {
    /// Construct a map with no locations or roads.
    ///
    /// Any label lookup against an empty map returns
    /// [`GraphError::UnknownVertex`].
    pub fn empty() -> Self {
        RoadMap {
            labels:       Vec::new(),
            index:        FxHashMap::default(),
            edge_a:       Vec::new(),
            edge_b:       Vec::new(),
            edge_weight:  Vec::new(),
            edge_default: Vec::new(),
            adjacency:    Vec::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    // ── Label lookup ──────────────────────────────────────────────────────

    /// Resolve a location label to its `VertexId`.
    pub fn resolve(&self, label: &str) -> GraphResult<VertexId> {
        self.index.get(label).copied().ok_or_else(|| GraphError::UnknownVertex {
            label: label.to_owned(),
        })
    }

    /// Whether a location with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// The label of a vertex.  Panics if `vertex` did not come from this map.
    pub fn label(&self, vertex: VertexId) -> &str {
        &self.labels[vertex.index()]
    }

    /// All location labels in ascending order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over `(neighbor, current weight)` for every road incident to
    /// `vertex`, in ascending neighbor-id order.
    #[inline]
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.adjacency[vertex.index()]
            .iter()
            .map(move |&(neighbor, edge)| (neighbor, self.edge_weight[edge.index()]))
    }

    /// Number of roads incident to `vertex`.
    #[inline]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex.index()].len()
    }

    /// Iterator over every road as `(a, b, current weight)` with `a < b`,
    /// in canonical (label) order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, Weight)> + '_ {
        (0..self.edge_a.len())
            .map(move |e| (self.edge_a[e], self.edge_b[e], self.edge_weight[e]))
    }

    /// The road directly connecting `u` and `v`, in either order.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.adjacency[u.index()]
            .iter()
            .find(|&&(neighbor, _)| neighbor == v)
            .map(|&(_, edge)| edge)
    }

    /// Current travel time of a road.
    pub fn weight(&self, edge: EdgeId) -> Weight {
        self.edge_weight[edge.index()]
    }

    // ── Congestion updates ────────────────────────────────────────────────

    /// Overwrite the travel time of the road between `u` and `v`.
    ///
    /// Endpoint order does not matter.  Returns [`GraphError::NoSuchEdge`]
    /// when the two locations are not directly connected.
    pub fn set_weight(&mut self, u: VertexId, v: VertexId, weight: Weight) -> GraphResult<()> {
        match self.edge_between(u, v) {
            Some(edge) => {
                self.edge_weight[edge.index()] = weight;
                Ok(())
            }
            None => Err(GraphError::NoSuchEdge {
                from: self.labels[u.index()].clone(),
                to:   self.labels[v.index()].clone(),
            }),
        }
    }

    /// Restore every road to the travel time the map was built with.
    pub fn reset_weights(&mut self) {
        self.edge_weight.copy_from_slice(&self.edge_default);
    }
}
