//! Domain types for a time-dependent transit network.
//!
//! These are the plain records a frozen network is made of. Every reference
//! between them is a dense integer handle; external feed identifiers are
//! resolved away by the builder.

mod conn;
mod error;
mod ids;
mod path;
mod query;
mod stop;
mod time;

pub use conn::{Conn, Trip};
pub use error::{BuildError, Namespace, UnknownReference};
pub use ids::{ConnIndex, DenseId, PathIndex, StationId, StopId, TripId};
pub use path::Path;
pub(crate) use path::unordered;
pub use query::Query;
pub use stop::{Station, Stop};
pub use time::{Horizon, InvalidHorizon, Time, UNREACHABLE};
