//! Validated travel-time weights.
//!
//! Every road carries a weight in whole minutes, restricted to the closed
//! range `1..=100`.  `Weight` is the only way to get a travel time into a
//! road map, so range checking lives here and nowhere else.

use std::fmt;

use crate::error::{GraphError, GraphResult};

/// A travel time in whole minutes, guaranteed to lie in `1..=100`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Weight(u32);

impl Weight {
    /// Smallest legal travel time, in minutes.
    pub const MIN: u32 = 1;
    /// Largest legal travel time, in minutes.
    pub const MAX: u32 = 100;

    /// Validate `minutes` and wrap it.
    ///
    /// Returns [`GraphError::InvalidWeight`] when `minutes` falls outside
    /// `MIN..=MAX`.
    pub fn new(minutes: u32) -> GraphResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&minutes) {
            Ok(Weight(minutes))
        } else {
            Err(GraphError::InvalidWeight { minutes })
        }
    }

    /// The travel time in minutes.
    #[inline(always)]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

impl TryFrom<u32> for Weight {
    type Error = GraphError;

    fn try_from(minutes: u32) -> GraphResult<Self> {
        Weight::new(minutes)
    }
}

impl From<Weight> for u32 {
    #[inline(always)]
    fn from(weight: Weight) -> u32 {
        weight.0
    }
}
