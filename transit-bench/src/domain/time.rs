//! Network time handling.
//!
//! Raw feeds carry wall-clock timestamps. Inside a network every time is an
//! offset in seconds from the start of the benchmark horizon, which keeps
//! Conns small and makes departure order a plain integer comparison.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

/// Seconds since the horizon start.
pub type Time = u32;

/// Arrival reported for journeys that do not reach their destination.
pub const UNREACHABLE: Time = Time::MAX;

/// Error returned when constructing an unusable horizon.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid horizon: {reason}")]
pub struct InvalidHorizon {
    reason: &'static str,
}

/// The half-open window `[start, end)` of retained Conns.
///
/// Raw feeds usually span more time than a benchmark needs; anything that
/// departs before `start` or arrives at or after `end` is dropped when it is
/// inserted.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use transit_bench::domain::Horizon;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 15)
///     .unwrap()
///     .and_hms_opt(6, 0, 0)
///     .unwrap();
/// let horizon = Horizon::new(start, start + Duration::hours(2)).unwrap();
///
/// assert_eq!(
///     horizon.window(start + Duration::minutes(5), start + Duration::minutes(20)),
///     Some((300, 1200))
/// );
/// // Arriving exactly at the end falls outside the window.
/// assert_eq!(horizon.window(start, start + Duration::hours(2)), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Horizon {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Horizon {
    /// Create a horizon covering `[start, end)`.
    ///
    /// The window must be non-empty and short enough for every offset to fit
    /// in a [`Time`].
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, InvalidHorizon> {
        if end <= start {
            return Err(InvalidHorizon {
                reason: "end must be after start",
            });
        }

        if (end - start).num_seconds() > i64::from(Time::MAX) {
            return Err(InvalidHorizon {
                reason: "span does not fit in 32-bit seconds",
            });
        }

        Ok(Self { start, end })
    }

    /// Returns the first instant inside the horizon.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Returns the first instant after the horizon.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns the length of the horizon.
    pub fn span(&self) -> Duration {
        self.end - self.start
    }

    /// Returns true if a movement departing and arriving at these instants
    /// lies inside the horizon.
    pub fn retains(&self, departure: NaiveDateTime, arrival: NaiveDateTime) -> bool {
        departure >= self.start && arrival < self.end
    }

    /// Converts a retained movement into horizon offsets.
    ///
    /// Returns `None` when the movement falls outside the horizon. The two
    /// instants are not compared with each other here.
    pub fn window(&self, departure: NaiveDateTime, arrival: NaiveDateTime) -> Option<(Time, Time)> {
        if !self.retains(departure, arrival) {
            return None;
        }
        Some((self.offset(departure)?, self.offset(arrival)?))
    }

    /// Offset of an instant from the horizon start, if it is representable.
    pub fn offset(&self, instant: NaiveDateTime) -> Option<Time> {
        Time::try_from((instant - self.start).num_seconds()).ok()
    }

    /// Wall-clock instant of a horizon offset.
    pub fn instant(&self, time: Time) -> NaiveDateTime {
        self.start + Duration::seconds(i64::from(time))
    }
}

impl fmt::Debug for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Horizon({} .. {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn at(secs: i64) -> NaiveDateTime {
        start() + Duration::seconds(secs)
    }

    fn day() -> Horizon {
        Horizon::new(start(), start() + Duration::days(1)).unwrap()
    }

    #[test]
    fn rejects_empty_horizon() {
        assert!(Horizon::new(start(), start()).is_err());
        assert!(Horizon::new(at(10), at(5)).is_err());
    }

    #[test]
    fn rejects_overlong_horizon() {
        let err = Horizon::new(start(), start() + Duration::days(365 * 200)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid horizon: span does not fit in 32-bit seconds"
        );
    }

    #[test]
    fn window_is_half_open() {
        let horizon = day();
        assert_eq!(horizon.window(at(0), at(60)), Some((0, 60)));
        assert_eq!(horizon.window(at(-1), at(60)), None);
        assert_eq!(horizon.window(at(0), at(86_399)), Some((0, 86_399)));
        assert_eq!(horizon.window(at(0), at(86_400)), None);
    }

    #[test]
    fn window_does_not_check_order() {
        assert_eq!(day().window(at(200), at(100)), Some((200, 100)));
    }

    #[test]
    fn instant_inverts_offset() {
        let horizon = day();
        assert_eq!(horizon.instant(3600), at(3600));
        assert_eq!(horizon.offset(at(3600)), Some(3600));
        assert_eq!(horizon.offset(at(-1)), None);
        assert_eq!(horizon.span(), Duration::days(1));
    }
}
