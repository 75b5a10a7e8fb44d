//! The frozen network.

use std::ops::Range;

use crate::domain::{
    Conn, ConnIndex, DenseId, Path, PathIndex, Station, StationId, Stop, StopId, Time, Trip,
    TripId,
};

/// An immutable, finalized transit network.
///
/// Produced by [`NetworkBuilder::finalize`](super::NetworkBuilder::finalize)
/// or by reading a persisted artifact. Collections are ordered for locality
/// and binary search:
///
/// - stops by station, so each station is a contiguous block of stop ids
/// - Conns by departure time (ties in insertion order)
/// - Paths by their lower endpoint, which is stored first
///
/// Nothing mutates a model after construction, so it can be shared across
/// threads behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkModel {
    stops: Vec<Stop>,
    conns: Vec<Conn>,
    paths: Vec<Path>,
    stations: Vec<Station>,
    trips: Vec<Trip>,
}

impl NetworkModel {
    /// Assemble a model from collections that already satisfy its ordering.
    pub(crate) fn from_parts(
        stops: Vec<Stop>,
        conns: Vec<Conn>,
        paths: Vec<Path>,
        stations: Vec<Station>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            stops,
            conns,
            paths,
            stations,
            trips,
        }
    }

    /// A network with nothing in it.
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn conns(&self) -> &[Conn] {
        &self.conns
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn conn(&self, index: ConnIndex) -> Option<&Conn> {
        self.conns.get(index.0)
    }

    pub fn path(&self, index: PathIndex) -> Option<&Path> {
        self.paths.get(index.0)
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    pub fn trip(&self, id: TripId) -> Option<&Trip> {
        self.trips.get(id.index())
    }

    /// Returns true if `stop` is a valid handle in this network.
    pub fn contains_stop(&self, stop: StopId) -> bool {
        stop.index() < self.stops.len()
    }

    /// Returns the station a stop belongs to.
    pub fn station_of(&self, stop: StopId) -> Option<StationId> {
        self.stop(stop).map(|s| s.station)
    }

    /// Returns the other stops of the same station, including `stop` itself.
    pub fn station_mates(&self, stop: StopId) -> &[StopId] {
        self.station_of(stop)
            .and_then(|station| self.station(station))
            .map(|station| station.members())
            .unwrap_or(&[])
    }

    /// Returns the Conns of a trip in network order.
    pub fn trip_conns(&self, trip: TripId) -> impl Iterator<Item = &Conn> + '_ {
        self.trip(trip)
            .into_iter()
            .flat_map(|t| t.conns().iter())
            .filter_map(|&index| self.conn(index))
    }

    /// Index of the first Conn departing at or after `time`.
    ///
    /// Equal to the Conn count if every Conn departs earlier; this is where
    /// a connection scan starting at `time` begins.
    pub fn first_departure_at_or_after(&self, time: Time) -> ConnIndex {
        ConnIndex(self.conns.partition_point(|c| c.departure < time))
    }

    /// Index range of Conns departing in `[from, until)`.
    pub fn departures_between(&self, from: Time, until: Time) -> Range<usize> {
        let start = self.first_departure_at_or_after(from).0;
        let end = self.first_departure_at_or_after(until).0.max(start);
        start..end
    }

    /// Paths whose lower-numbered endpoint is `stop`.
    pub fn paths_from(&self, stop: StopId) -> &[Path] {
        let start = self.paths.partition_point(|p| p.lower() < stop);
        let end = self.paths.partition_point(|p| p.lower() <= stop);
        &self.paths[start..end]
    }

    /// All Paths touching `stop`, in either direction.
    pub fn paths_touching(&self, stop: StopId) -> impl Iterator<Item = (PathIndex, &Path)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.touches(stop))
            .map(|(i, p)| (PathIndex(i), p))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn conn_count(&self) -> usize {
        self.conns.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}
