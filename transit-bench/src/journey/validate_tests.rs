//! Unit tests for journey validation.

use super::*;
use crate::domain::{ConnIndex, Path, PathIndex};
use crate::journey::{Leg, ResolvedLeg};
use crate::journey::test_network::*;

fn run(
    model: &NetworkModel,
    legs: &[Leg],
    from: StopId,
    to: StopId,
    departure: Time,
) -> Verdict {
    let journey = Journey::new(legs.to_vec());
    validate(model, &journey, &Query::new(from, to, departure)).unwrap()
}

// Success

#[test]
fn zero_leg_journey_succeeds_in_place() {
    for stop in [A, B, C, D] {
        for departure in [0, 17, 86_000] {
            assert_eq!(
                check(&[], stop, stop, departure).as_tuple(),
                (true, true, departure)
            );
        }
    }
}

#[test]
fn two_conns_on_one_trip() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB), Leg::Conn(BC)], A, C, 100);

    assert_eq!(
        verdict,
        Verdict::Succeeded {
            arrival: 300,
            simple: true
        }
    );
    assert_eq!(verdict.as_tuple(), (true, true, 300));
}

#[test]
fn waiting_for_a_later_conn_is_fine() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB)], A, B, 0);
    assert_eq!(verdict.as_tuple(), (true, true, 200));
}

#[test]
fn path_can_be_walked_in_either_direction() {
    let model = abc_network();

    // stored as B-C, walked B -> C
    let forward = run(&model, &[Leg::Conn(AB), Leg::Path(WALK_BC)], A, C, 100);
    assert_eq!(forward.as_tuple(), (true, true, 320));

    // walked C -> B
    let backward = run(&model, &[Leg::Path(WALK_BC)], C, B, 50);
    assert_eq!(backward.as_tuple(), (true, true, 170));
}

#[test]
fn walk_then_ride() {
    let model = abc_network();
    let verdict = run(
        &model,
        &[Leg::Path(WALK_CD), Leg::Path(WALK_BC), Leg::Conn(BC)],
        D,
        C,
        0,
    );

    // D -> C -> B by foot, back to C by train: C is visited twice
    assert_eq!(verdict.as_tuple(), (true, false, 300));
}

// Simplicity

#[test]
fn revisiting_a_stop_is_connected_but_not_simple() {
    let model = abc_network();
    let verdict = run(
        &model,
        &[Leg::Conn(AB), Leg::Conn(BA), Leg::Conn(AC)],
        A,
        C,
        100,
    );

    assert!(verdict.connected());
    assert!(!verdict.simple());
    assert_eq!(verdict.as_tuple(), (true, false, 320));
}

#[test]
fn round_trip_to_origin_is_not_simple() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB), Leg::Conn(BA)], A, A, 100);
    assert_eq!(verdict.as_tuple(), (true, false, 240));
}

// Failures

#[test]
fn conn_leaving_before_arrival_is_non_causal() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB), Leg::Conn(BC_EARLY)], A, C, 100);

    assert_eq!(
        verdict,
        Verdict::NonCausal {
            leg: 1,
            ready: 200,
            departure: 150
        }
    );
    assert_eq!(verdict.as_tuple(), (false, false, UNREACHABLE));
}

#[test]
fn conn_leaving_before_query_departure_is_non_causal() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB)], A, B, 101);
    assert!(matches!(verdict, Verdict::NonCausal { leg: 0, .. }));
}

#[test]
fn walking_delays_count_towards_causality() {
    let model = abc_network();
    // arrive B at 200, walk to C (320), walk back to B (440): BC leaves at 250
    let verdict = run(
        &model,
        &[
            Leg::Conn(AB),
            Leg::Path(WALK_BC),
            Leg::Path(WALK_BC),
            Leg::Conn(BC),
        ],
        A,
        C,
        100,
    );
    assert_eq!(
        verdict,
        Verdict::NonCausal {
            leg: 3,
            ready: 440,
            departure: 250
        }
    );
}

#[test]
fn conn_from_elsewhere_is_disconnected() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(BC)], A, C, 0);

    assert_eq!(verdict, Verdict::Disconnected { leg: 0, at: A });
    assert_eq!(verdict.as_tuple(), (false, false, UNREACHABLE));
}

#[test]
fn path_not_touching_current_stop_is_disconnected() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB), Leg::Path(WALK_CD)], A, D, 100);
    assert_eq!(verdict, Verdict::Disconnected { leg: 1, at: B });
}

#[test]
fn ending_elsewhere_is_unreached() {
    let model = abc_network();
    let verdict = run(&model, &[Leg::Conn(AB)], A, C, 100);

    assert_eq!(verdict, Verdict::Unreached { reached: B });
    assert_eq!(verdict.as_tuple(), (false, false, UNREACHABLE));
}

#[test]
fn zero_leg_journey_to_elsewhere_is_unreached() {
    assert_eq!(check(&[], A, B, 0), Verdict::Unreached { reached: A });
}

#[test]
fn failure_after_revisit_reports_failure() {
    let model = abc_network();
    let verdict = run(
        &model,
        &[Leg::Conn(AB), Leg::Conn(BA), Leg::Conn(BC)],
        A,
        C,
        100,
    );
    assert_eq!(verdict, Verdict::Disconnected { leg: 2, at: A });
    assert!(!verdict.simple());
}

#[test]
fn walk_past_the_end_of_time_fails() {
    let long_walk = Path::new(A, B, UNREACHABLE - 10);
    let legs = [ResolvedLeg::Path(&long_walk)];

    assert_eq!(check(&legs, A, B, 9).as_tuple(), (true, true, UNREACHABLE - 1));
    // landing exactly on the marker is not a valid arrival
    assert_eq!(check(&legs, A, B, 10), Verdict::Overflow { leg: 0 });
    assert_eq!(check(&legs, A, B, 11), Verdict::Overflow { leg: 0 });
    assert_eq!(check(&legs, A, B, 11).arrival(), UNREACHABLE);
}

#[test]
fn validate_surfaces_bad_indices() {
    let model = abc_network();
    let journey = Journey::new(vec![Leg::Conn(AB), Leg::Path(PathIndex(99))]);
    let result = validate(&model, &journey, &Query::new(A, B, 0));
    assert!(matches!(
        result,
        Err(ReconstructError::IndexOutOfRange { position: 1, .. })
    ));

    let journey = Journey::new(vec![Leg::Conn(ConnIndex(model.conn_count()))]);
    assert!(validate(&model, &journey, &Query::new(A, B, 0)).is_err());
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn leg_strategy() -> impl Strategy<Value = Leg> {
        prop_oneof![
            (0usize..5).prop_map(|i| Leg::Conn(ConnIndex(i))),
            (0usize..2).prop_map(|i| Leg::Path(PathIndex(i))),
        ]
    }

    proptest! {
        #[test]
        fn verdicts_are_consistent(
            legs in prop::collection::vec(leg_strategy(), 0..8),
            from in 0u32..4,
            to in 0u32..4,
            departure in 0u32..400,
        ) {
            let model = abc_network();
            let verdict = run(&model, &legs, StopId(from), StopId(to), departure);
            let (connected, simple, arrival) = verdict.as_tuple();

            if connected {
                prop_assert!(arrival >= departure);
                prop_assert!(arrival != UNREACHABLE);
            } else {
                prop_assert!(!simple);
                prop_assert_eq!(arrival, UNREACHABLE);
            }
            if simple {
                prop_assert!(connected);
            }
        }
    }
}
