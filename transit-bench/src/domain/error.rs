//! Network construction errors.
//!
//! These are raised synchronously by the builder and abort only the call
//! that caused them. External identifiers are carried in their `Debug`
//! rendering so the errors stay independent of the identifier type.

use std::fmt;

use super::Time;

/// Independent identifier namespaces of a network under construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Stop,
    Station,
    Trip,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Stop => f.write_str("stop"),
            Namespace::Station => f.write_str("station"),
            Namespace::Trip => f.write_str("trip"),
        }
    }
}

/// Error returned when an external identifier was never registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {namespace} identifier {id}")]
pub struct UnknownReference {
    pub namespace: Namespace,
    pub id: String,
}

/// Errors raised while inserting into a network builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A stop with this external id already exists
    #[error("stop {0} is already registered")]
    DuplicateStop(String),

    /// A Conn or Path refers to a stop that was never added
    #[error("stop {0} is not registered")]
    UnknownStop(String),

    /// Any other lookup of an unregistered identifier
    #[error(transparent)]
    UnknownReference(#[from] UnknownReference),

    /// A Conn arrives before it departs
    #[error("departure {departure}s is later than arrival {arrival}s")]
    InvalidTimeOrder { departure: Time, arrival: Time },

    /// A Path with a negative walking time
    #[error("path duration cannot be negative ({0}s)")]
    NegativeDuration(i64),

    /// A Path too long to store
    #[error("path duration of {0}s does not fit in 32-bit seconds")]
    DurationOutOfRange(i64),
}

impl BuildError {
    /// Turns a failed stop lookup into the stop-specific error.
    pub(crate) fn unknown_stop(err: UnknownReference) -> Self {
        match err.namespace {
            Namespace::Stop => BuildError::UnknownStop(err.id),
            _ => BuildError::UnknownReference(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BuildError::DuplicateStop("\"A\"".into());
        assert_eq!(err.to_string(), "stop \"A\" is already registered");

        let err = BuildError::InvalidTimeOrder {
            departure: 200,
            arrival: 100,
        };
        assert_eq!(
            err.to_string(),
            "departure 200s is later than arrival 100s"
        );

        let err = BuildError::NegativeDuration(-5);
        assert_eq!(err.to_string(), "path duration cannot be negative (-5s)");

        let err: BuildError = UnknownReference {
            namespace: Namespace::Trip,
            id: "\"T1\"".into(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown trip identifier \"T1\"");
    }

    #[test]
    fn stop_lookups_become_unknown_stop() {
        let err = BuildError::unknown_stop(UnknownReference {
            namespace: Namespace::Stop,
            id: "7".into(),
        });
        assert_eq!(err, BuildError::UnknownStop("7".into()));

        let err = BuildError::unknown_stop(UnknownReference {
            namespace: Namespace::Station,
            id: "7".into(),
        });
        assert!(matches!(err, BuildError::UnknownReference(_)));
    }
}
