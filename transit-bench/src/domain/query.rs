//! Journey queries.

use serde::{Deserialize, Serialize};

use super::{StopId, Time};

/// A request for journeys from one stop to another, leaving no earlier than
/// `departure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query {
    pub from: StopId,
    pub to: StopId,
    pub departure: Time,
}

impl Query {
    /// Create a new query.
    pub fn new(from: StopId, to: StopId, departure: Time) -> Self {
        Self {
            from,
            to,
            departure,
        }
    }
}
