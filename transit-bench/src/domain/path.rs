//! Walking edges.

use serde::{Deserialize, Serialize};

use super::{StopId, Time};

/// A time-independent, undirected walking edge between two stops.
///
/// Field order carries no direction: a walk can be taken from either
/// endpoint. Use [`Path::other_endpoint`] to orient it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    pub a: StopId,
    pub b: StopId,
    /// Walking time in seconds.
    pub duration: Time,
}

impl Path {
    /// Create a new walking edge.
    pub fn new(a: StopId, b: StopId, duration: Time) -> Self {
        Self { a, b, duration }
    }

    /// Given one endpoint, returns the other.
    ///
    /// Returns `None` if `stop` is not an endpoint of this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_bench::domain::{Path, StopId};
    ///
    /// let path = Path::new(StopId(1), StopId(2), 60);
    /// assert_eq!(path.other_endpoint(StopId(1)), Some(StopId(2)));
    /// assert_eq!(path.other_endpoint(StopId(2)), Some(StopId(1)));
    /// assert_eq!(path.other_endpoint(StopId(3)), None);
    /// ```
    pub fn other_endpoint(&self, stop: StopId) -> Option<StopId> {
        if stop == self.a {
            Some(self.b)
        } else if stop == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// Returns true if `stop` is one of the endpoints.
    pub fn touches(&self, stop: StopId) -> bool {
        self.other_endpoint(stop).is_some()
    }

    /// Returns the endpoint pair with the lower id first.
    pub fn key(&self) -> (StopId, StopId) {
        unordered(self.a, self.b)
    }

    /// Returns the lower-numbered endpoint.
    pub fn lower(&self) -> StopId {
        self.a.min(self.b)
    }
}

/// Orders an endpoint pair so both directions share one key.
pub(crate) fn unordered(a: StopId, b: StopId) -> (StopId, StopId) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_direction() {
        let forward = Path::new(StopId(5), StopId(2), 30);
        let backward = Path::new(StopId(2), StopId(5), 30);
        assert_eq!(forward.key(), backward.key());
        assert_eq!(forward.lower(), StopId(2));
    }

    #[test]
    fn self_loop_returns_same_stop() {
        let path = Path::new(StopId(4), StopId(4), 0);
        assert_eq!(path.other_endpoint(StopId(4)), Some(StopId(4)));
        assert!(path.touches(StopId(4)));
        assert!(!path.touches(StopId(0)));
    }
}
