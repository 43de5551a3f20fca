//! CSV topology loader.
//!
//! # CSV format
//!
//! One row per road.  Locations are declared implicitly by appearing in a
//! row; a row with an empty `to` declares a location with no roads at all.
//!
//! ```csv
//! from,to,minutes
//! Airport,Mall,15
//! Airport,Downtown,25
//! Quarry,,
//! ```
//!
//! | Row shape                | Meaning                                  |
//! |--------------------------|------------------------------------------|
//! | `from`,`to`,`minutes`    | Undirected road with a travel time       |
//! | `from`,empty,empty       | Isolated location                        |
//!
//! Labels are trimmed of surrounding whitespace.  The loader only parses;
//! range checks and duplicate detection happen in
//! [`Topology::build`](crate::Topology::build).

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::error::{TopologyError, TopologyResult};
use crate::topology::Topology;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRecord {
    from:    String,
    to:      Option<String>,
    minutes: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Topology`] from a CSV file.
pub fn load_topology_csv(path: &Path) -> TopologyResult<Topology> {
    let file = std::fs::File::open(path).map_err(TopologyError::Io)?;
    load_topology_reader(file)
}

/// Like [`load_topology_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// strings.
pub fn load_topology_reader<R: Read>(reader: R) -> TopologyResult<Topology> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut topology = Topology::new();
    let mut declared: FxHashSet<String> = FxHashSet::default();

    for result in csv_reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| TopologyError::Parse(e.to_string()))?;

        let from = row.from.trim().to_owned();
        if from.is_empty() {
            return Err(TopologyError::Parse("row with an empty `from` label".into()));
        }
        if declared.insert(from.clone()) {
            topology.location(from.clone());
        }

        let to = row.to.as_deref().map(str::trim).filter(|s| !s.is_empty());
        match (to, row.minutes) {
            // Isolated location: this row declares `from` and nothing else.
            (None, None) => {}
            (Some(to), Some(minutes)) => {
                let to = to.to_owned();
                if declared.insert(to.clone()) {
                    topology.location(to.clone());
                }
                topology.road(from, to, minutes);
            }
            (Some(to), None) => {
                return Err(TopologyError::Parse(format!(
                    "road {from:?} -> {to:?} is missing a travel time"
                )));
            }
            (None, Some(minutes)) => {
                return Err(TopologyError::Parse(format!(
                    "row for {from:?} has a travel time ({minutes}) but no `to` label"
                )));
            }
        }
    }

    Ok(topology)
}
