//! Label-level query results.
//!
//! `Itinerary` is the label-level mirror of
//! [`Route`](traffic_route::Route); `EdgeListing` is one row of the map's
//! road inventory.  Both own their strings, so they stay valid after the
//! gateway's lock is released.

use std::fmt;

/// A computed route, expressed in location labels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Locations visited in order, source first, destination last.
    pub stops: Vec<String>,
    /// Total travel time in minutes.
    pub total_minutes: u32,
}

impl Itinerary {
    /// Number of roads traversed.  Zero for a same-place itinerary.
    pub fn leg_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Iterator over the `(from, to)` label pair of each leg in order.
    pub fn legs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stops.windows(2).map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

impl fmt::Display for Itinerary {
    /// `A → B → C (9 min)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} min)", self.stops.join(" → "), self.total_minutes)
    }
}

/// One road in the map's inventory, endpoints in ascending label order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeListing {
    pub from: String,
    pub to:   String,
    /// Current travel time in minutes.
    pub minutes: u32,
}

impl fmt::Display for EdgeListing {
    /// `A ↔ B: 4 min`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ↔ {}: {} min", self.from, self.to, self.minutes)
    }
}
