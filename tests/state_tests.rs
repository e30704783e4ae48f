// Host-side tests for the per-node progress state.

use bounce_ball_line::constants::STEP_PER_TICK;
use bounce_ball_line::core::{AnimationState, Direction, StateStep};

const MAX_TICKS: usize = 1_000;

/// Runs updates until the boundary, returning the number of updates taken.
fn run_to_boundary(state: &mut AnimationState) -> usize {
    for n in 1..=MAX_TICKS {
        if state.update(STEP_PER_TICK) == StateStep::Boundary {
            return n;
        }
    }
    panic!("no boundary within {MAX_TICKS} ticks");
}

#[test]
fn new_state_is_settled_at_zero() {
    let state = AnimationState::new();
    assert_eq!(state.scale(), 0.0);
    assert_eq!(state.prev_scale(), 0.0);
    assert_eq!(state.dir(), None);
    assert!(state.is_settled());
}

#[test]
fn update_while_settled_does_nothing() {
    let mut state = AnimationState::new();
    assert_eq!(state.update(STEP_PER_TICK), StateStep::Settled);
    assert_eq!(state.scale(), 0.0);
}

#[test]
fn start_from_zero_goes_forward() {
    let mut state = AnimationState::new();
    assert!(state.start_updating());
    assert_eq!(state.dir(), Some(Direction::Forward));
}

#[test]
fn start_is_ignored_mid_gesture() {
    let mut state = AnimationState::new();
    assert!(state.start_updating());
    state.update(STEP_PER_TICK);
    let before = state.clone();
    assert!(!state.start_updating());
    assert_eq!(state, before);
}

#[test]
fn forward_gesture_increases_monotonically_then_clamps_once() {
    let mut state = AnimationState::new();
    state.start_updating();
    let mut prev = state.scale();
    let mut boundaries = 0;
    for _ in 0..MAX_TICKS {
        match state.update(STEP_PER_TICK) {
            StateStep::Animating => {
                assert!(state.scale() > prev);
                assert!(state.scale() - state.prev_scale() <= 1.0);
                prev = state.scale();
            }
            StateStep::Boundary => {
                boundaries += 1;
                break;
            }
            StateStep::Settled => panic!("settled before boundary"),
        }
    }
    assert_eq!(boundaries, 1);
    assert_eq!(state.scale(), 1.0);
    assert_eq!(state.prev_scale(), 1.0);
    assert_eq!(state.dir(), None);

    // Nothing further happens after the boundary
    assert_eq!(state.update(STEP_PER_TICK), StateStep::Settled);
    assert_eq!(state.scale(), 1.0);
}

#[test]
fn gestures_alternate_direction() {
    let mut state = AnimationState::new();
    state.start_updating();
    run_to_boundary(&mut state);

    assert!(state.start_updating());
    assert_eq!(state.dir(), Some(Direction::Backward));
    let mut prev = state.scale();
    loop {
        match state.update(STEP_PER_TICK) {
            StateStep::Animating => {
                assert!(state.scale() < prev);
                prev = state.scale();
            }
            StateStep::Boundary => break,
            StateStep::Settled => panic!("settled before boundary"),
        }
    }
    assert_eq!(state.scale(), 0.0);
    assert_eq!(state.prev_scale(), 0.0);

    assert!(state.start_updating());
    assert_eq!(state.dir(), Some(Direction::Forward));
}

#[test]
fn gesture_length_matches_step() {
    let mut state = AnimationState::new();
    state.start_updating();
    let ticks = run_to_boundary(&mut state);
    let expected = (1.0 / STEP_PER_TICK).ceil() as usize;
    assert!(
        ticks >= expected && ticks <= expected + 2,
        "ticks={ticks} expected~{expected}"
    );
}

#[test]
fn direction_sign_and_flip() {
    assert_eq!(Direction::Forward.sign(), 1.0);
    assert_eq!(Direction::Backward.sign(), -1.0);
    assert_eq!(Direction::Forward.flipped(), Direction::Backward);
    assert_eq!(Direction::Backward.flipped(), Direction::Forward);
}

#[test]
fn cancel_before_any_update_settles_in_place() {
    let mut state = AnimationState::new();
    state.start_updating();
    run_to_boundary(&mut state);

    assert!(state.start_updating());
    state.cancel();
    assert!(state.is_settled());
    assert_eq!(state.scale(), 1.0);
    assert_eq!(state.update(STEP_PER_TICK), StateStep::Settled);

    // Restarting picks the same direction as the cancelled gesture
    assert!(state.start_updating());
    assert_eq!(state.dir(), Some(Direction::Backward));
}
