//! Journey types.
//!
//! A `Journey` is what a routing algorithm hands back: an ordered list of
//! legs, each pointing into the Conn or Path collection of the network the
//! algorithm was given. It carries no times or stops of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Conn, ConnIndex, Path, PathIndex, StopId, Time};

/// The collection a leg points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegKind {
    Conn,
    Path,
}

impl fmt::Display for LegKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LegKind::Conn => f.write_str("conn"),
            LegKind::Path => f.write_str("path"),
        }
    }
}

/// One step of a journey: ride a Conn or walk a Path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "lowercase")]
pub enum Leg {
    Conn(ConnIndex),
    Path(PathIndex),
}

impl Leg {
    /// Returns which collection this leg indexes.
    pub fn kind(&self) -> LegKind {
        match self {
            Leg::Conn(_) => LegKind::Conn,
            Leg::Path(_) => LegKind::Path,
        }
    }

    /// Returns the raw index into that collection.
    pub fn index(&self) -> usize {
        match self {
            Leg::Conn(index) => index.0,
            Leg::Path(index) => index.0,
        }
    }

    /// Returns true if this is a Conn leg.
    pub fn is_conn(&self) -> bool {
        matches!(self, Leg::Conn(_))
    }

    /// Returns true if this is a Path leg.
    pub fn is_path(&self) -> bool {
        matches!(self, Leg::Path(_))
    }
}

/// A candidate journey proposed by an algorithm.
///
/// Journeys are not checked on construction; use
/// [`reconstruct`](super::reconstruct) and [`check`](super::check) to find
/// out whether one is realizable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    legs: Vec<Leg>,
}

impl Journey {
    /// Constructs a journey from legs in travel order.
    pub fn new(legs: Vec<Leg>) -> Self {
        Self { legs }
    }

    /// Append a leg.
    pub fn push(&mut self, leg: Leg) {
        self.legs.push(leg);
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns true for the zero-leg journey.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Returns the number of Conn legs.
    pub fn conn_count(&self) -> usize {
        self.legs.iter().filter(|l| l.is_conn()).count()
    }

    /// Returns the number of Path legs.
    pub fn path_count(&self) -> usize {
        self.legs.iter().filter(|l| l.is_path()).count()
    }
}

impl FromIterator<Leg> for Journey {
    fn from_iter<I: IntoIterator<Item = Leg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A leg resolved against a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLeg<'a> {
    Conn(&'a Conn),
    Path(&'a Path),
}

impl ResolvedLeg<'_> {
    /// Returns which collection the leg came from.
    pub fn kind(&self) -> LegKind {
        match self {
            ResolvedLeg::Conn(_) => LegKind::Conn,
            ResolvedLeg::Path(_) => LegKind::Path,
        }
    }

    /// Returns the travel time of this leg in seconds.
    pub fn duration(&self) -> Time {
        match self {
            ResolvedLeg::Conn(conn) => conn.duration(),
            ResolvedLeg::Path(path) => path.duration,
        }
    }

    /// Returns true if the leg can be entered at `stop`.
    pub fn starts_at(&self, stop: StopId) -> bool {
        match self {
            ResolvedLeg::Conn(conn) => conn.from == stop,
            ResolvedLeg::Path(path) => path.touches(stop),
        }
    }
}
