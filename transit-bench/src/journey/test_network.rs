//! Small fixture network shared by journey tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::{ConnIndex, Horizon, PathIndex, StopId};
use crate::network::{NetworkBuilder, NetworkModel};

pub const A: StopId = StopId(0);
pub const B: StopId = StopId(1);
pub const C: StopId = StopId(2);
pub const D: StopId = StopId(3);

/// A -> B, 100 -> 200
pub const AB: ConnIndex = ConnIndex(0);
/// B -> C, 150 -> 180 (leaves B before AB gets there)
pub const BC_EARLY: ConnIndex = ConnIndex(1);
/// B -> A, 210 -> 240
pub const BA: ConnIndex = ConnIndex(2);
/// B -> C, 250 -> 300 (same trip as AB)
pub const BC: ConnIndex = ConnIndex(3);
/// A -> C, 260 -> 320
pub const AC: ConnIndex = ConnIndex(4);

/// B <-> C, 120s
pub const WALK_BC: PathIndex = PathIndex(0);
/// C <-> D, 60s
pub const WALK_CD: PathIndex = PathIndex(1);

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn t(secs: i64) -> NaiveDateTime {
    start() + Duration::seconds(secs)
}

/// Four singleton stops with the Conns and Paths named above.
pub fn abc_network() -> NetworkModel {
    let horizon = Horizon::new(start(), start() + Duration::days(1)).unwrap();
    let mut builder: NetworkBuilder = NetworkBuilder::new(horizon);

    for (i, id) in ["A", "B", "C", "D"].into_iter().enumerate() {
        builder.add_stop(id, 48.0 + i as f64 / 100.0, 11.0, None).unwrap();
    }

    builder.add_conn("T1", "A", "B", t(100), t(200)).unwrap();
    builder.add_conn("T1", "B", "C", t(250), t(300)).unwrap();
    builder.add_conn("T2", "B", "C", t(150), t(180)).unwrap();
    builder.add_conn("T3", "B", "A", t(210), t(240)).unwrap();
    builder.add_conn("T4", "A", "C", t(260), t(320)).unwrap();

    builder.add_path("C", "B", Duration::seconds(120)).unwrap();
    builder.add_path("D", "C", Duration::seconds(60)).unwrap();

    builder.finalize()
}
