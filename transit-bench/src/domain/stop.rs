//! Stops and stations.

use serde::{Deserialize, Serialize};

use super::{StationId, StopId};

/// A physical boarding/alighting location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Dense id, equal to the stop's position in the network.
    pub id: StopId,
    /// The station this stop belongs to.
    pub station: StationId,
    pub latitude: f64,
    pub longitude: f64,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: StopId, station: StationId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            station,
            latitude,
            longitude,
        }
    }
}

/// A group of stops treated as interchangeable journey endpoints.
///
/// Members are kept in ascending stop order, which after finalizing is also
/// insertion order within the station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Station {
    members: Vec<StopId>,
}

impl Station {
    /// Create an empty station.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member stop.
    pub(crate) fn push(&mut self, stop: StopId) {
        self.members.push(stop);
    }

    /// Returns the member stops in order.
    pub fn members(&self) -> &[StopId] {
        &self.members
    }

    /// Returns true if `stop` belongs to this station.
    pub fn contains(&self, stop: StopId) -> bool {
        self.members.contains(&stop)
    }

    /// Returns the number of member stops.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the station has no member stops.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<StopId> for Station {
    fn from_iter<I: IntoIterator<Item = StopId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}
