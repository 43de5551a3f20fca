//! Declarative road-map description and validation.
//!
//! A [`Topology`] is the plain-data form of a map: location labels plus road
//! declarations with travel times in minutes.  It carries no invariants of
//! its own — everything is checked in [`Topology::build`], which either
//! produces a [`RoadMap`] or reports the first offending declaration.
//!
//! `Topology` and [`RoadDef`] derive `Serialize`/`Deserialize`, so a map can
//! be embedded in a larger config document as easily as built in code.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use traffic_core::{EdgeId, GraphError, VertexId, Weight};

use crate::error::{TopologyError, TopologyResult};
use crate::store::RoadMap;

/// One road declaration: an undirected link between two named locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadDef {
    pub from:    String,
    pub to:      String,
    /// Travel time in minutes; validated against `Weight::MIN..=MAX` at build.
    pub minutes: u32,
}

/// Declarative description of a road map.
///
/// # Example
///
/// ```
/// use traffic_graph::Topology;
///
/// let mut topo = Topology::new();
/// topo.location("Downtown").location("Mall");
/// topo.road("Downtown", "Mall", 12);
///
/// let map = topo.build().unwrap();
/// assert_eq!(map.vertex_count(), 2);
/// assert_eq!(map.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub locations: Vec<String>,
    pub roads:     Vec<RoadDef>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a location.  Chainable.
    pub fn location(&mut self, label: impl Into<String>) -> &mut Self {
        self.locations.push(label.into());
        self
    }

    /// Declare an undirected road between two declared locations.  Chainable.
    pub fn road(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        minutes: u32,
    ) -> &mut Self {
        self.roads.push(RoadDef {
            from: from.into(),
            to: to.into(),
            minutes,
        });
        self
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Validate the declarations and produce a [`RoadMap`].
    ///
    /// Checks, in order per declaration: both endpoints declared, no
    /// self-loops, travel time in range, at most one road per location pair
    /// (regardless of declaration order).  Edge ids are assigned after
    /// sorting roads by canonical endpoints, so a given topology always
    /// builds the identical map.
    pub fn build(&self) -> TopologyResult<RoadMap> {
        // ── Intern locations in ascending label order ─────────────────────
        let mut labels = self.locations.clone();
        labels.sort_unstable();
        if let Some(pair) = labels.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(TopologyError::DuplicateVertex { label: pair[0].clone() });
        }

        let index: FxHashMap<String, VertexId> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), VertexId(i as u32)))
            .collect();

        // ── Validate and canonicalize roads ───────────────────────────────
        let resolve = |label: &str| -> TopologyResult<VertexId> {
            index.get(label).copied().ok_or_else(|| {
                GraphError::UnknownVertex { label: label.to_owned() }.into()
            })
        };

        let mut rows: Vec<(VertexId, VertexId, Weight)> = Vec::with_capacity(self.roads.len());
        let mut seen: FxHashSet<(VertexId, VertexId)> = FxHashSet::default();

        for road in &self.roads {
            let from = resolve(&road.from)?;
            let to   = resolve(&road.to)?;
            if from == to {
                return Err(TopologyError::SelfLoop { label: road.from.clone() });
            }
            let weight = Weight::new(road.minutes)?;

            // Canonical orientation: smaller id (= smaller label) first.
            let (a, b) = if from < to { (from, to) } else { (to, from) };
            if !seen.insert((a, b)) {
                return Err(TopologyError::DuplicateEdge {
                    from: labels[a.index()].clone(),
                    to:   labels[b.index()].clone(),
                });
            }
            rows.push((a, b, weight));
        }

        // Deterministic edge ids: canonical endpoint order is label order.
        rows.sort_unstable_by_key(|&(a, b, _)| (a, b));

        // ── Columnar edge table + adjacency ───────────────────────────────
        let edge_a:      Vec<VertexId> = rows.iter().map(|&(a, _, _)| a).collect();
        let edge_b:      Vec<VertexId> = rows.iter().map(|&(_, b, _)| b).collect();
        let edge_weight: Vec<Weight>   = rows.iter().map(|&(_, _, w)| w).collect();
        let edge_default = edge_weight.clone();

        let mut adjacency: Vec<Vec<(VertexId, EdgeId)>> = vec![Vec::new(); labels.len()];
        for (e, &(a, b, _)) in rows.iter().enumerate() {
            let edge = EdgeId(e as u32);
            adjacency[a.index()].push((b, edge));
            adjacency[b.index()].push((a, edge));
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }

        Ok(RoadMap {
            labels,
            index,
            edge_a,
            edge_b,
            edge_weight,
            edge_default,
            adjacency,
        })
    }
}
