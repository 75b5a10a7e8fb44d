//! Dense internal identifiers.
//!
//! Every entity in a network is addressed by a small integer handle assigned
//! in insertion order. External identifiers never make it past the builder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A dense integer handle, convertible to and from a collection index.
pub trait DenseId: Copy + Eq + fmt::Debug {
    /// Wraps a raw collection index.
    fn from_index(index: usize) -> Self;

    /// Returns the collection index this handle stands for.
    fn index(self) -> usize;
}

macro_rules! dense_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl DenseId for $name {
            fn from_index(index: usize) -> Self {
                $name(index as u32)
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

dense_id!(
    /// Handle of a stop; equal to its position in the stop collection.
    StopId
);

dense_id!(
    /// Handle of a station.
    StationId
);

dense_id!(
    /// Handle of a trip.
    TripId
);

/// Position of a Conn in the network's Conn collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnIndex(pub usize);

/// Position of a Path in the network's Path collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathIndex(pub usize);
