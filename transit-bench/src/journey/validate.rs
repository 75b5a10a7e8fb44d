//! Journey validation.
//!
//! Walks a resolved journey from the query origin, tracking where the
//! traveller stands and what time it is. A journey is *connected* if every
//! leg starts where the previous one ended, never departs before the
//! traveller arrives and finishes at the destination. It is *simple* if it
//! never returns to a stop it already visited. A non-simple journey is still
//! realizable; the two answers are kept apart so wasteful results can be
//! told from broken ones.

use std::collections::HashSet;

use tracing::trace;

use super::leg::{Journey, ResolvedLeg};
use super::reconstruct::{ReconstructError, reconstruct};
use crate::domain::{Query, StopId, Time, UNREACHABLE};
use crate::network::NetworkModel;

/// Outcome of validating one journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every leg connects and the destination is reached at `arrival`
    Succeeded { arrival: Time, simple: bool },

    /// Leg `leg` cannot be entered from `at` (teleportation)
    Disconnected { leg: usize, at: StopId },

    /// Leg `leg` departs at `departure`, before the traveller is there at `ready`
    NonCausal {
        leg: usize,
        ready: Time,
        departure: Time,
    },

    /// All legs connect but end at `reached` instead of the destination
    Unreached { reached: StopId },

    /// Walking leg `leg` pushes the clock past the last representable time
    Overflow { leg: usize },
}

impl Verdict {
    /// Returns true if the journey is physically realizable.
    pub fn connected(&self) -> bool {
        matches!(self, Verdict::Succeeded { .. })
    }

    /// Returns true if the journey is realizable and visits no stop twice.
    pub fn simple(&self) -> bool {
        matches!(self, Verdict::Succeeded { simple: true, .. })
    }

    /// Returns the arrival time, or [`UNREACHABLE`] for failed journeys.
    pub fn arrival(&self) -> Time {
        match self {
            Verdict::Succeeded { arrival, .. } => *arrival,
            _ => UNREACHABLE,
        }
    }

    /// Returns `(connected, simple, arrival)`.
    pub fn as_tuple(&self) -> (bool, bool, Time) {
        (self.connected(), self.simple(), self.arrival())
    }
}

/// Position of the traveller while walking a journey.
struct Walker {
    stop: StopId,
    time: Time,
    visited: HashSet<StopId>,
    simple: bool,
}

impl Walker {
    fn new(origin: StopId, departure: Time) -> Self {
        Self {
            stop: origin,
            time: departure,
            visited: HashSet::from([origin]),
            simple: true,
        }
    }

    /// Take one leg, or report why it cannot be taken.
    fn step(&mut self, position: usize, leg: &ResolvedLeg<'_>) -> Result<(), Verdict> {
        match leg {
            ResolvedLeg::Conn(conn) => {
                if conn.from != self.stop {
                    return Err(Verdict::Disconnected {
                        leg: position,
                        at: self.stop,
                    });
                }
                if conn.departure < self.time {
                    return Err(Verdict::NonCausal {
                        leg: position,
                        ready: self.time,
                        departure: conn.departure,
                    });
                }
                self.time = conn.arrival;
                self.arrive(conn.to);
            }
            ResolvedLeg::Path(path) => {
                let Some(next) = path.other_endpoint(self.stop) else {
                    return Err(Verdict::Disconnected {
                        leg: position,
                        at: self.stop,
                    });
                };
                self.time = self
                    .time
                    .checked_add(path.duration)
                    .filter(|&time| time != UNREACHABLE)
                    .ok_or(Verdict::Overflow { leg: position })?;
                self.arrive(next);
            }
        }
        Ok(())
    }

    fn arrive(&mut self, stop: StopId) {
        self.stop = stop;
        if !self.visited.insert(stop) {
            trace!(?stop, "revisited stop");
            self.simple = false;
        }
    }
}

/// Check resolved legs against a query.
///
/// Starting at `origin` at `departure`, each Conn must leave from the
/// current stop no earlier than the current time; each Path must touch the
/// current stop and is walked towards its other endpoint. The walk must end
/// at `destination`. A clock that would reach [`UNREACHABLE`] fails the
/// journey. Revisiting a stop clears the simple flag but does not
/// stop validation.
///
/// # Examples
///
/// ```
/// use transit_bench::domain::StopId;
/// use transit_bench::journey::check;
///
/// // Staying put is always fine.
/// let verdict = check(&[], StopId(4), StopId(4), 600);
/// assert_eq!(verdict.as_tuple(), (true, true, 600));
/// ```
pub fn check(
    legs: &[ResolvedLeg<'_>],
    origin: StopId,
    destination: StopId,
    departure: Time,
) -> Verdict {
    let mut walker = Walker::new(origin, departure);

    for (position, leg) in legs.iter().enumerate() {
        if let Err(verdict) = walker.step(position, leg) {
            trace!(?verdict, "journey failed");
            return verdict;
        }
        trace!(position, stop = ?walker.stop, time = walker.time, "took leg");
    }

    if walker.stop != destination {
        return Verdict::Unreached {
            reached: walker.stop,
        };
    }

    Verdict::Succeeded {
        arrival: walker.time,
        simple: walker.simple,
    }
}

/// Resolve `journey` against `model` and check it against `query`.
///
/// # Errors
///
/// Returns a [`ReconstructError`] if the journey indexes outside the model.
pub fn validate(
    model: &NetworkModel,
    journey: &Journey,
    query: &Query,
) -> Result<Verdict, ReconstructError> {
    let legs = reconstruct(model, journey)?;
    Ok(check(&legs, query.from, query.to, query.departure))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
