//! Route result type.

use traffic_core::VertexId;

/// The result of a successful routing query: the ordered stops from source
/// to destination and the total travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Vertices visited in order, source first, destination last.
    pub stops: Vec<VertexId>,
    /// Sum of the road weights along `stops`, in minutes.
    pub total_minutes: u32,
}

impl Route {
    /// Number of roads traversed.  Zero for a trivial route.
    pub fn leg_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.len() <= 1
    }

    /// Iterator over the `(from, to)` vertex pair of each leg in order.
    pub fn legs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.stops.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
