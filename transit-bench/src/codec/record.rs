//! The persisted network record.
//!
//! Field names and order follow the artifact other tools exchange: counts
//! first, then stops in station order, Conns in departure order and Paths
//! in from-stop order. Stop ids are implicit in record position.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::CodecError;
use crate::domain::{
    Conn, ConnIndex, DenseId, Path, Station, StationId, Stop, StopId, Trip, TripId, UNREACHABLE,
    unordered,
};
use crate::network::NetworkModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub station_id: u32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnRecord {
    pub trip_id: u32,
    pub from_stop_id: u32,
    pub to_stop_id: u32,
    pub departure_time: u32,
    pub arrival_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRecord {
    pub from_stop_id: u32,
    pub to_stop_id: u32,
    pub duration: u32,
}

/// A whole network as persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub station_count: u32,
    pub trip_count: u32,
    pub stops: Vec<StopRecord>,
    pub conns: Vec<ConnRecord>,
    pub paths: Vec<PathRecord>,
}

impl NetworkRecord {
    /// Flatten a model into its persisted form.
    pub fn from_model(model: &NetworkModel) -> Self {
        Self {
            station_count: model.station_count() as u32,
            trip_count: model.trip_count() as u32,
            stops: model
                .stops()
                .iter()
                .map(|s| StopRecord {
                    station_id: s.station.0,
                    latitude: s.latitude,
                    longitude: s.longitude,
                })
                .collect(),
            conns: model
                .conns()
                .iter()
                .map(|c| ConnRecord {
                    trip_id: c.trip.0,
                    from_stop_id: c.from.0,
                    to_stop_id: c.to.0,
                    departure_time: c.departure,
                    arrival_time: c.arrival,
                })
                .collect(),
            paths: model
                .paths()
                .iter()
                .map(|p| PathRecord {
                    from_stop_id: p.a.0,
                    to_stop_id: p.b.0,
                    duration: p.duration,
                })
                .collect(),
        }
    }

    /// Rebuild a model, checking every reference and ordering guarantee.
    ///
    /// Stations and trips are reassembled by scanning stops and Conns in
    /// record order. Path records must be ordered by their from-stop as
    /// written; the loaded model stores each Path lower id first and orders
    /// Paths stably by that endpoint, so Path indices refer to the model.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidRecord`] for dangling ids, counts that
    /// cannot be right, empty stations or trips, Conns that arrive before
    /// they depart, repeated Paths, or collections out of order.
    pub fn into_model(self) -> Result<NetworkModel, CodecError> {
        let stop_count = self.stops.len();
        let check_stop = |what: &str, i: usize, id: u32| {
            if (id as usize) < stop_count {
                Ok(StopId(id))
            } else {
                Err(invalid(format!("{what} {i} refers to unknown stop {id}")))
            }
        };

        // Every station has a stop and every trip a Conn.
        if self.station_count as usize > stop_count {
            return Err(invalid(format!(
                "{} stations cannot hold {stop_count} stops",
                self.station_count
            )));
        }
        if self.trip_count as usize > self.conns.len() {
            return Err(invalid(format!(
                "{} trips cannot share {} conns",
                self.trip_count,
                self.conns.len()
            )));
        }

        let mut stations = vec![Station::new(); self.station_count as usize];
        let mut stops = Vec::with_capacity(stop_count);
        for (i, record) in self.stops.into_iter().enumerate() {
            let station = StationId(record.station_id);
            let Some(members) = stations.get_mut(station.index()) else {
                return Err(invalid(format!("stop {i} refers to unknown station {station}")));
            };
            let id = StopId::from_index(i);
            members.push(id);
            stops.push(Stop::new(id, station, record.latitude, record.longitude));
        }
        if stops.windows(2).any(|w| w[0].station > w[1].station) {
            return Err(invalid("stops are not ordered by station".into()));
        }
        if let Some(empty) = stations.iter().position(Station::is_empty) {
            return Err(invalid(format!("station {empty} has no stops")));
        }

        let mut trips = vec![Trip::new(); self.trip_count as usize];
        let mut conns = Vec::with_capacity(self.conns.len());
        for (i, record) in self.conns.into_iter().enumerate() {
            let trip = TripId(record.trip_id);
            let from = check_stop("conn", i, record.from_stop_id)?;
            let to = check_stop("conn", i, record.to_stop_id)?;
            if record.departure_time > record.arrival_time {
                return Err(invalid(format!("conn {i} arrives before it departs")));
            }
            if record.arrival_time == UNREACHABLE {
                return Err(invalid(format!("conn {i} arrives at the unreachable marker")));
            }
            let Some(legs) = trips.get_mut(trip.index()) else {
                return Err(invalid(format!("conn {i} refers to unknown trip {trip}")));
            };
            legs.push(ConnIndex(i));
            conns.push(Conn::new(trip, from, to, record.departure_time, record.arrival_time));
        }
        if conns.windows(2).any(|w| w[0].departure > w[1].departure) {
            return Err(invalid("conns are not ordered by departure".into()));
        }
        if let Some(empty) = trips.iter().position(Trip::is_empty) {
            return Err(invalid(format!("trip {empty} has no conns")));
        }

        if self.paths.windows(2).any(|w| w[0].from_stop_id > w[1].from_stop_id) {
            return Err(invalid("paths are not ordered by from-stop".into()));
        }
        let mut seen = HashSet::with_capacity(self.paths.len());
        let mut paths = Vec::with_capacity(self.paths.len());
        for (i, record) in self.paths.into_iter().enumerate() {
            let (a, b) = unordered(
                check_stop("path", i, record.from_stop_id)?,
                check_stop("path", i, record.to_stop_id)?,
            );
            if !seen.insert((a, b)) {
                return Err(invalid(format!("path {i} repeats the stop pair {a}-{b}")));
            }
            paths.push(Path::new(a, b, record.duration));
        }
        paths.sort_by_key(|p| p.a);

        Ok(NetworkModel::from_parts(stops, conns, paths, stations, trips))
    }
}

fn invalid(message: String) -> CodecError {
    CodecError::InvalidRecord(message)
}
