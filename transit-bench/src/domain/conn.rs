//! Scheduled vehicle movements and the trips they form.

use serde::{Deserialize, Serialize};

use super::{ConnIndex, StopId, Time, TripId};

/// A scheduled movement of one vehicle between two consecutive stops.
///
/// # Invariants
///
/// - `departure <= arrival` (checked by the builder and the codec)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conn {
    pub trip: TripId,
    pub from: StopId,
    pub to: StopId,
    pub departure: Time,
    pub arrival: Time,
}

impl Conn {
    /// Create a new connection.
    pub fn new(trip: TripId, from: StopId, to: StopId, departure: Time, arrival: Time) -> Self {
        Self {
            trip,
            from,
            to,
            departure,
            arrival,
        }
    }

    /// Returns the time spent on board in seconds.
    pub fn duration(&self) -> Time {
        self.arrival.saturating_sub(self.departure)
    }
}

/// One vehicle run: its Conns in network order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trip {
    conns: Vec<ConnIndex>,
}

impl Trip {
    /// Create an empty trip.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, conn: ConnIndex) {
        self.conns.push(conn);
    }

    /// Returns the Conn indices of this trip.
    pub fn conns(&self) -> &[ConnIndex] {
        &self.conns
    }

    /// Returns the number of Conns in this trip.
    pub fn len(&self) -> usize {
        self.conns.len()
    }

    /// Returns true if the trip has no Conns.
    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }
}

impl FromIterator<ConnIndex> for Trip {
    fn from_iter<I: IntoIterator<Item = ConnIndex>>(iter: I) -> Self {
        Self {
            conns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conn_duration() {
        let conn = Conn::new(TripId(0), StopId(0), StopId(1), 100, 250);
        assert_eq!(conn.duration(), 150);
    }

    #[test]
    fn trip_keeps_push_order() {
        let mut trip = Trip::new();
        trip.push(ConnIndex(4));
        trip.push(ConnIndex(1));
        assert_eq!(trip.conns(), &[ConnIndex(4), ConnIndex(1)]);
        assert_eq!(trip.len(), 2);
    }
}
