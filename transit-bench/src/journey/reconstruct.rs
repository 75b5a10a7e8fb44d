//! Resolving journeys against a network.

use super::leg::{Journey, Leg, LegKind, ResolvedLeg};
use crate::network::NetworkModel;

/// Error from resolving a journey.
///
/// This always means the algorithm produced indices for a different network
/// than the one it was given; the model itself is fine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconstructError {
    /// A leg points past the end of its collection
    #[error("leg {position}: {kind} index {index} is out of range (network has {len})")]
    IndexOutOfRange {
        position: usize,
        kind: LegKind,
        index: usize,
        len: usize,
    },
}

/// Resolve every leg of `journey` against `model`.
///
/// # Errors
///
/// Returns [`ReconstructError::IndexOutOfRange`] for the first leg whose
/// index is not valid for its collection.
///
/// # Examples
///
/// ```
/// use transit_bench::domain::ConnIndex;
/// use transit_bench::journey::{Journey, Leg, ReconstructError, reconstruct};
/// use transit_bench::network::NetworkModel;
///
/// let empty = NetworkModel::empty();
/// let journey = Journey::new(vec![Leg::Conn(ConnIndex(0))]);
/// assert!(matches!(
///     reconstruct(&empty, &journey),
///     Err(ReconstructError::IndexOutOfRange { index: 0, len: 0, .. })
/// ));
/// ```
pub fn reconstruct<'a>(
    model: &'a NetworkModel,
    journey: &Journey,
) -> Result<Vec<ResolvedLeg<'a>>, ReconstructError> {
    journey
        .legs()
        .iter()
        .enumerate()
        .map(|(position, &leg)| resolve(model, position, leg))
        .collect()
}

fn resolve(
    model: &NetworkModel,
    position: usize,
    leg: Leg,
) -> Result<ResolvedLeg<'_>, ReconstructError> {
    let out_of_range = |len| ReconstructError::IndexOutOfRange {
        position,
        kind: leg.kind(),
        index: leg.index(),
        len,
    };

    match leg {
        Leg::Conn(index) => model
            .conn(index)
            .map(ResolvedLeg::Conn)
            .ok_or_else(|| out_of_range(model.conn_count())),
        Leg::Path(index) => model
            .path(index)
            .map(ResolvedLeg::Path)
            .ok_or_else(|| out_of_range(model.path_count())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnIndex, Path, PathIndex, StopId};
    use crate::journey::test_network::abc_network;

    #[test]
    fn resolves_legs_in_order() {
        let model = abc_network();
        let journey = Journey::new(vec![
            Leg::Conn(ConnIndex(0)),
            Leg::Path(PathIndex(0)),
            Leg::Conn(ConnIndex(1)),
        ]);

        let legs = reconstruct(&model, &journey).unwrap();

        assert_eq!(legs.len(), 3);
        assert_eq!(legs[0], ResolvedLeg::Conn(&model.conns()[0]));
        assert_eq!(legs[1], ResolvedLeg::Path(&model.paths()[0]));
        assert_eq!(legs[2], ResolvedLeg::Conn(&model.conns()[1]));
    }

    #[test]
    fn empty_journey_resolves_to_nothing() {
        let model = abc_network();
        assert!(reconstruct(&model, &Journey::default()).unwrap().is_empty());
    }

    #[test]
    fn conn_index_past_end_fails() {
        let model = abc_network();
        let count = model.conn_count();
        let journey = Journey::new(vec![Leg::Conn(ConnIndex(0)), Leg::Conn(ConnIndex(count))]);

        let err = reconstruct(&model, &journey).unwrap_err();
        assert_eq!(
            err,
            ReconstructError::IndexOutOfRange {
                position: 1,
                kind: LegKind::Conn,
                index: count,
                len: count,
            }
        );
        assert_eq!(
            err.to_string(),
            format!("leg 1: conn index {count} is out of range (network has {count})")
        );
    }

    #[test]
    fn path_index_is_checked_against_paths() {
        let model = abc_network();
        let count = model.path_count();
        // valid as a Conn index, not as a Path index
        let journey = Journey::new(vec![Leg::Path(PathIndex(count))]);

        assert!(model.conn(ConnIndex(count)).is_some());
        assert!(matches!(
            reconstruct(&model, &journey),
            Err(ReconstructError::IndexOutOfRange {
                kind: LegKind::Path,
                ..
            })
        ));
    }

    #[test]
    fn resolved_legs_borrow_model_records() {
        let model = abc_network();
        let journey = Journey::new(vec![Leg::Path(PathIndex(0))]);
        let legs = reconstruct(&model, &journey).unwrap();

        let expected = Path::new(StopId(1), StopId(2), 120);
        assert_eq!(legs, vec![ResolvedLeg::Path(&expected)]);
    }
}
