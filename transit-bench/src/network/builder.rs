//! Mutable network construction.
//!
//! Ingestion tooling feeds stops, Conns and Paths into a [`NetworkBuilder`]
//! keyed by whatever identifiers the raw feed uses. Finalizing consumes the
//! builder, drops every external identifier and yields a [`NetworkModel`].

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use chrono::{Duration, NaiveDateTime};
use tracing::{debug, info};

use super::model::NetworkModel;
use super::registry::IdentifierRegistry;
use crate::domain::{
    BuildError, Conn, ConnIndex, DenseId, Horizon, Namespace, Path, PathIndex, Station, StationId,
    Stop, StopId, Time, Trip, TripId, unordered,
};

/// Single-writer builder for a [`NetworkModel`].
///
/// Every `add_*` call either applies completely or fails without touching
/// the builder, so a bad record in a feed can be skipped and ingestion
/// continued.
///
/// The [`StopId`], [`ConnIndex`] and [`PathIndex`] values returned by the
/// `add_*` methods are builder-local. [`NetworkBuilder::finalize`] sorts and
/// renumbers stops, Conns and Paths, so they must not be used to address the
/// finalized model.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use transit_bench::domain::Horizon;
/// use transit_bench::network::NetworkBuilder;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(0, 0, 0)
///     .unwrap();
/// let horizon = Horizon::new(start, start + Duration::days(1)).unwrap();
///
/// let mut builder: NetworkBuilder = NetworkBuilder::new(horizon);
/// builder.add_stop("A", 52.52, 13.40, None).unwrap();
/// builder.add_stop("B", 52.53, 13.41, None).unwrap();
/// builder
///     .add_conn("ICE 1", "A", "B", start + Duration::minutes(10), start + Duration::minutes(25))
///     .unwrap();
/// builder.add_path("A", "B", Duration::minutes(20)).unwrap();
///
/// let network = builder.finalize();
/// assert_eq!(network.stop_count(), 2);
/// assert_eq!(network.conns()[0].departure, 600);
/// assert_eq!(network.paths()[0].duration, 1200);
/// ```
#[derive(Debug)]
pub struct NetworkBuilder<K = String> {
    horizon: Horizon,
    stop_ids: IdentifierRegistry<K, StopId>,
    station_ids: IdentifierRegistry<K, StationId>,
    trip_ids: IdentifierRegistry<K, TripId>,
    stops: Vec<Stop>,
    stations: Vec<Station>,
    trips: Vec<Trip>,
    conns: Vec<Conn>,
    paths: Vec<Path>,
    /// Unordered endpoint pair -> the one Path record for it.
    path_lookup: HashMap<(StopId, StopId), PathIndex>,
    dropped_conns: usize,
}

impl<K> NetworkBuilder<K>
where
    K: Eq + Hash + Debug,
{
    /// Create an empty builder retaining Conns inside `horizon`.
    pub fn new(horizon: Horizon) -> Self {
        Self {
            horizon,
            stop_ids: IdentifierRegistry::new(Namespace::Stop),
            station_ids: IdentifierRegistry::new(Namespace::Station),
            trip_ids: IdentifierRegistry::new(Namespace::Trip),
            stops: Vec::new(),
            stations: Vec::new(),
            trips: Vec::new(),
            conns: Vec::new(),
            paths: Vec::new(),
            path_lookup: HashMap::new(),
            dropped_conns: 0,
        }
    }

    /// Returns the horizon Conns are windowed against.
    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Register a stop.
    ///
    /// Stops sharing a `station` key are grouped into one station. A stop
    /// without a station key gets a station of its own. The returned id is
    /// builder-local.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DuplicateStop`] if `id` is already registered.
    pub fn add_stop(
        &mut self,
        id: impl Into<K>,
        latitude: f64,
        longitude: f64,
        station: Option<K>,
    ) -> Result<StopId, BuildError> {
        let id = id.into();
        if self.stop_ids.contains(&id) {
            return Err(BuildError::DuplicateStop(format!("{id:?}")));
        }

        let station = match station {
            Some(key) => self.station_ids.get_or_create(key),
            None => self.station_ids.allocate(),
        };
        if station.index() == self.stations.len() {
            self.stations.push(Station::new());
        }

        let stop = self.stop_ids.get_or_create(id);
        self.stops.push(Stop::new(stop, station, latitude, longitude));
        self.stations[station.index()].push(stop);

        Ok(stop)
    }

    /// Add a scheduled movement of `trip` between two registered stops.
    ///
    /// Returns `Ok(None)` without changing anything if the movement lies
    /// outside the horizon. The first retained Conn of a trip key creates
    /// the trip. A returned index is builder-local.
    ///
    /// # Errors
    ///
    /// - [`BuildError::UnknownStop`] if either stop is unregistered
    /// - [`BuildError::InvalidTimeOrder`] if the Conn arrives before it departs
    pub fn add_conn<Q>(
        &mut self,
        trip: impl Into<K>,
        from: &Q,
        to: &Q,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    ) -> Result<Option<ConnIndex>, BuildError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        let from = self.stop_ids.require(from).map_err(BuildError::unknown_stop)?;
        let to = self.stop_ids.require(to).map_err(BuildError::unknown_stop)?;

        let Some((departure, arrival)) = self.horizon.window(departure, arrival) else {
            self.dropped_conns += 1;
            debug!(?from, ?to, "dropping conn outside horizon");
            return Ok(None);
        };

        if departure > arrival {
            return Err(BuildError::InvalidTimeOrder { departure, arrival });
        }

        let trip = self.trip_ids.get_or_create(trip.into());
        if trip.index() == self.trips.len() {
            self.trips.push(Trip::new());
        }

        let index = ConnIndex(self.conns.len());
        self.conns.push(Conn::new(trip, from, to, departure, arrival));
        self.trips[trip.index()].push(index);

        Ok(Some(index))
    }

    /// Add a walking edge between two registered stops.
    ///
    /// Paths are undirected. If the pair already has a Path, in either
    /// direction, its duration becomes the smaller of the two and the
    /// existing builder-local index is returned.
    ///
    /// # Errors
    ///
    /// - [`BuildError::UnknownStop`] if either stop is unregistered
    /// - [`BuildError::NegativeDuration`] if `duration` is negative
    /// - [`BuildError::DurationOutOfRange`] if it exceeds 32-bit seconds
    pub fn add_path<Q>(&mut self, a: &Q, b: &Q, duration: Duration) -> Result<PathIndex, BuildError>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + Debug + ?Sized,
    {
        let a = self.stop_ids.require(a).map_err(BuildError::unknown_stop)?;
        let b = self.stop_ids.require(b).map_err(BuildError::unknown_stop)?;

        let secs = duration.num_seconds();
        if duration < Duration::zero() {
            return Err(BuildError::NegativeDuration(secs));
        }
        let duration = Time::try_from(secs).map_err(|_| BuildError::DurationOutOfRange(secs))?;

        let key = unordered(a, b);
        if let Some(&index) = self.path_lookup.get(&key) {
            let path = &mut self.paths[index.0];
            if duration < path.duration {
                debug!(?a, ?b, old = path.duration, new = duration, "shortening path");
                path.duration = duration;
            }
            return Ok(index);
        }

        let index = PathIndex(self.paths.len());
        self.paths.push(Path::new(a, b, duration));
        self.path_lookup.insert(key, index);

        Ok(index)
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

    /// Number of Conns discarded for falling outside the horizon.
    pub fn dropped_conn_count(&self) -> usize {
        self.dropped_conns
    }

    /// Freeze the network.
    ///
    /// Stops are stably sorted by station and renumbered to their new
    /// positions, Conns are stably sorted by departure and Paths by their
    /// lower endpoint (stored first). Every reference is rewritten to the
    /// new numbering and trips list their Conns in the sorted order. The
    /// result depends only on the sequence of successful insertions.
    pub fn finalize(self) -> NetworkModel {
        let Self {
            stops,
            stations,
            trips,
            conns,
            paths,
            dropped_conns,
            ..
        } = self;

        // Stops: block by station, then renumber.
        let mut stop_order: Vec<usize> = (0..stops.len()).collect();
        stop_order.sort_by_key(|&old| stops[old].station);

        let mut renumber = vec![StopId(0); stops.len()];
        for (new, &old) in stop_order.iter().enumerate() {
            renumber[old] = StopId::from_index(new);
        }
        let remap = |stop: StopId| renumber[stop.index()];

        let mut sorted_stations = vec![Station::new(); stations.len()];
        let sorted_stops: Vec<Stop> = stop_order
            .iter()
            .enumerate()
            .map(|(new, &old)| {
                let stop = &stops[old];
                let id = StopId::from_index(new);
                sorted_stations[stop.station.index()].push(id);
                Stop::new(id, stop.station, stop.latitude, stop.longitude)
            })
            .collect();

        // Conns: sort by departure, ties keep insertion order.
        let mut sorted_conns: Vec<Conn> = conns
            .into_iter()
            .map(|c| Conn::new(c.trip, remap(c.from), remap(c.to), c.departure, c.arrival))
            .collect();
        sorted_conns.sort_by_key(|c| c.departure);

        let mut sorted_trips = vec![Trip::new(); trips.len()];
        for (index, conn) in sorted_conns.iter().enumerate() {
            sorted_trips[conn.trip.index()].push(ConnIndex(index));
        }

        // Paths: lower endpoint first, sorted by it.
        let mut sorted_paths: Vec<Path> = paths
            .into_iter()
            .map(|p| {
                let (a, b) = unordered(remap(p.a), remap(p.b));
                Path::new(a, b, p.duration)
            })
            .collect();
        sorted_paths.sort_by_key(|p| p.a);

        info!(
            stops = sorted_stops.len(),
            stations = sorted_stations.len(),
            trips = sorted_trips.len(),
            conns = sorted_conns.len(),
            paths = sorted_paths.len(),
            dropped_conns,
            "finalized network"
        );

        NetworkModel::from_parts(
            sorted_stops,
            sorted_conns,
            sorted_paths,
            sorted_stations,
            sorted_trips,
        )
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
