//! Benchmark harness for public transit routing algorithms.
//!
//! Builds a time-dependent transit network from raw feed records, freezes it
//! into a compact indexed model, hands that model to routing algorithms and
//! checks the journeys they return for physical realizability.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use transit_bench::domain::{ConnIndex, Horizon, PathIndex, Query, StopId};
//! use transit_bench::journey::{Journey, Leg, validate};
//! use transit_bench::network::NetworkBuilder;
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let at = |secs| start + Duration::seconds(secs);
//!
//! //       2 * - - - * 3   (2 to 3 is a footpath)
//! //        /         \
//! //     1 *           * 4
//! //      /             \
//! //   0 * ------------> * 5
//! let horizon = Horizon::new(start, at(1800)).unwrap();
//! let mut builder: NetworkBuilder = NetworkBuilder::new(horizon);
//! let stops = [
//!     ("0", 0.0, 0.0),
//!     ("1", 1.0, 1.0),
//!     ("2", 2.0, 2.0),
//!     ("3", 2.0, 3.0),
//!     ("4", 1.0, 4.0),
//!     ("5", 0.0, 5.0),
//! ];
//! for (stop, lat, lon) in stops {
//!     builder.add_stop(stop, lat, lon, None).unwrap();
//! }
//! builder.add_conn("t0", "0", "1", at(0), at(150)).unwrap();
//! builder.add_conn("t0", "1", "2", at(150), at(300)).unwrap();
//! builder.add_conn("t1", "3", "4", at(600), at(750)).unwrap();
//! builder.add_conn("t1", "4", "5", at(750), at(900)).unwrap();
//! builder.add_conn("t2", "0", "5", at(600), at(1200)).unwrap();
//! builder.add_path("2", "3", Duration::seconds(150)).unwrap();
//! let network = builder.finalize();
//!
//! // Each stop is its own station and stations were opened in stop order,
//! // so finalizing keeps stop ids 0..=5. Conns 2 and 3 both leave at 600.
//! // Ride to 2, walk to 3, ride on to 5.
//! let journey = Journey::new(vec![
//!     Leg::Conn(ConnIndex(0)),
//!     Leg::Conn(ConnIndex(1)),
//!     Leg::Path(PathIndex(0)),
//!     Leg::Conn(ConnIndex(2)),
//!     Leg::Conn(ConnIndex(4)),
//! ]);
//! let verdict = validate(&network, &journey, &Query::new(StopId(0), StopId(5), 0)).unwrap();
//! assert_eq!(verdict.as_tuple(), (true, true, 900));
//! ```

pub mod bench;
pub mod codec;
pub mod domain;
pub mod journey;
pub mod network;
