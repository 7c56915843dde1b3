use battle_group::{
    calc_probability, Coordinate, Field, Mode, RemainingFleet, ShotHistory, ShotOutcome,
    TargetingError, TargetingState,
};

fn c(row: i8, col: i8) -> Coordinate {
    Coordinate::new(row, col)
}

fn fresh_field() -> Field {
    calc_probability(&RemainingFleet::standard(), &ShotHistory::new())
}

fn queue(state: &TargetingState) -> Vec<Coordinate> {
    state.queue().iter().copied().collect()
}

#[test]
fn test_first_hit_queues_neighbours_by_density() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();
    assert_eq!(state.mode(), Mode::Hunting);

    shots.record(c(3, 3), ShotOutcome::Hit).unwrap();
    state.record_hit(c(3, 3), &shots, &field);

    assert_eq!(state.mode(), Mode::Targeting);
    assert_eq!(state.hits(), &[c(3, 3)]);
    let q = queue(&state);
    assert_eq!(q.len(), 4);
    for n in c(3, 3).adjacent() {
        assert!(q.contains(&n));
    }
    for pair in q.windows(2) {
        assert!(field.get(pair[0]) >= field.get(pair[1]));
    }
}

#[test]
fn test_corner_hit_skips_shot_and_off_grid_neighbours() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();
    shots.record(c(0, 1), ShotOutcome::Miss).unwrap();
    shots.record(c(0, 0), ShotOutcome::Hit).unwrap();
    state.record_hit(c(0, 0), &shots, &field);
    assert_eq!(queue(&state), vec![c(1, 0)]);
}

#[test]
fn test_horizontal_pair_puts_line_ends_first() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    shots.record(c(3, 3), ShotOutcome::Hit).unwrap();
    state.record_hit(c(3, 3), &shots, &field);
    assert!(state.pop_candidate().is_some());

    shots.record(c(3, 4), ShotOutcome::Hit).unwrap();
    state.record_hit(c(3, 4), &shots, &field);

    let q = queue(&state);
    assert_eq!(&q[..2], &[c(3, 2), c(3, 5)]);
    assert!(!q.contains(&c(3, 4)));
    let mut dedup = q.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), q.len());
}

#[test]
fn test_vertical_pair_at_edge_keeps_valid_end_only() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    shots.record(c(0, 6), ShotOutcome::Hit).unwrap();
    state.record_hit(c(0, 6), &shots, &field);
    shots.record(c(1, 6), ShotOutcome::Hit).unwrap();
    state.record_hit(c(1, 6), &shots, &field);

    let q = queue(&state);
    assert_eq!(q[0], c(2, 6));
    assert!(q.iter().all(|x| x.valid() && !shots.contains(*x)));
    // off-line candidates trail the on-line ones
    let first_off = q.iter().position(|x| x.col != 6).unwrap_or(q.len());
    assert!(q[first_off..].iter().all(|x| x.col != 6));
}

#[test]
fn test_sunk_pair_returns_to_hunting() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    shots.record(c(5, 5), ShotOutcome::Hit).unwrap();
    state.record_hit(c(5, 5), &shots, &field);
    shots.record(c(5, 6), ShotOutcome::Sunk(2)).unwrap();
    state.record_sunk(c(5, 6), 2, &shots, &field).unwrap();

    assert!(state.hits().is_empty());
    assert_eq!(state.mode(), Mode::Hunting);
    assert!(state.queue().is_empty());
}

#[test]
fn test_sinking_shot_inside_the_run() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    for coord in [c(2, 4), c(2, 6)] {
        shots.record(coord, ShotOutcome::Hit).unwrap();
        state.record_hit(coord, &shots, &field);
    }
    shots.record(c(2, 5), ShotOutcome::Sunk(3)).unwrap();
    state.record_sunk(c(2, 5), 3, &shots, &field).unwrap();
    assert_eq!(state.mode(), Mode::Hunting);
}

#[test]
fn test_sink_leaving_other_hits_keeps_targeting() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    // a destroyer at (4,4)-(4,5) and a hit on a neighbouring ship at (5,4)
    for coord in [c(4, 4), c(5, 4)] {
        shots.record(coord, ShotOutcome::Hit).unwrap();
        state.record_hit(coord, &shots, &field);
    }
    while state.pop_candidate().is_some() {}
    shots.record(c(4, 5), ShotOutcome::Sunk(2)).unwrap();
    state.record_sunk(c(4, 5), 2, &shots, &field).unwrap();

    assert_eq!(state.mode(), Mode::Targeting);
    assert_eq!(state.hits(), &[c(5, 4)]);
    let q = queue(&state);
    assert!(!q.is_empty());
    assert!(q.iter().all(|x| !shots.contains(*x)));
}

#[test]
fn test_sunk_ship_touching_another_keeps_the_other_hits() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    // a vertical ship through (3,4)-(4,4) and a destroyer at (5,4)-(5,5)
    for coord in [c(3, 4), c(4, 4), c(5, 5)] {
        shots.record(coord, ShotOutcome::Hit).unwrap();
        state.record_hit(coord, &shots, &field);
    }
    shots.record(c(5, 4), ShotOutcome::Sunk(2)).unwrap();
    state.record_sunk(c(5, 4), 2, &shots, &field).unwrap();

    assert_eq!(state.hits(), &[c(3, 4), c(4, 4)]);
    assert_eq!(state.mode(), Mode::Targeting);
}

#[test]
fn test_sunk_ship_ending_against_a_collinear_hit() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    for coord in [c(6, 2), c(6, 3)] {
        shots.record(coord, ShotOutcome::Hit).unwrap();
        state.record_hit(coord, &shots, &field);
    }
    shots.record(c(6, 4), ShotOutcome::Sunk(2)).unwrap();
    state.record_sunk(c(6, 4), 2, &shots, &field).unwrap();

    assert_eq!(state.hits(), &[c(6, 2)]);
}

#[test]
fn test_diagonal_hits_append_new_neighbours() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    shots.record(c(4, 4), ShotOutcome::Hit).unwrap();
    state.record_hit(c(4, 4), &shots, &field);
    let before = queue(&state);

    shots.record(c(5, 5), ShotOutcome::Hit).unwrap();
    state.record_hit(c(5, 5), &shots, &field);

    let q = queue(&state);
    assert_eq!(&q[..before.len()], &before[..]);
    let added = &q[before.len()..];
    let mut expected = vec![c(6, 5), c(5, 6)];
    let mut sorted = added.to_vec();
    sorted.sort();
    expected.sort();
    assert_eq!(sorted, expected);
    for pair in added.windows(2) {
        assert!(field.get(pair[0]) >= field.get(pair[1]));
    }
}

#[test]
fn test_non_contiguous_sink_is_an_error() {
    let field = fresh_field();
    let mut shots = ShotHistory::new();
    let mut state = TargetingState::new();

    shots.record(c(1, 1), ShotOutcome::Hit).unwrap();
    state.record_hit(c(1, 1), &shots, &field);
    shots.record(c(1, 3), ShotOutcome::Sunk(2)).unwrap();
    let err = state.record_sunk(c(1, 3), 2, &shots, &field).unwrap_err();
    assert_eq!(err, TargetingError::UnresolvedSink { at: c(1, 3), length: 2 });

    state.reset();
    assert_eq!(state.mode(), Mode::Hunting);
    assert!(state.queue().is_empty());
}

#[test]
fn test_fleet_removes_a_single_instance() {
    let mut fleet = RemainingFleet::standard();
    assert!(fleet.sink(3));
    assert_eq!(fleet.lengths(), &[5, 4, 3, 2]);
    assert!(fleet.sink(3));
    assert!(!fleet.sink(3));
    assert_eq!(fleet.lengths(), &[5, 4, 2]);
}

#[test]
fn test_history_rejects_repeats_and_off_grid() {
    let mut shots = ShotHistory::new();
    shots.record(c(2, 2), ShotOutcome::Miss).unwrap();
    assert_eq!(
        shots.record(c(2, 2), ShotOutcome::Hit),
        Err(TargetingError::AlreadyShot(c(2, 2)))
    );
    assert_eq!(
        shots.record(c(2, 10), ShotOutcome::Miss),
        Err(TargetingError::OffGrid(c(2, 10)))
    );
    assert_eq!(shots.len(), 1);
    assert_eq!(shots.miss_count(), 1);
}
