//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both id types wrap a `u32` and are `Copy + Ord + Hash`, so they work as
//! map keys and sort keys without ceremony.  The inner integer is `pub` for
//! direct indexing into the store's columnar `Vec`s; callers should prefer
//! the `.index()` helper for clarity.

use std::fmt;

/// Generate a typed wrapper around a `u32` index.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Sentinel meaning "no valid id".  All bits set is never a real
            /// index, so defaulted ids stand out in debug output.
            pub const INVALID: $name = $name(u32::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a location in a road map.
    ///
    /// Ids are assigned in ascending label order when a map is built, so
    /// comparing two `VertexId`s compares their labels alphabetically.
    pub struct VertexId;
}

typed_id! {
    /// Index of an undirected road in a road map's edge table.
    pub struct EdgeId;
}
