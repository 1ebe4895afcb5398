//! End-to-end scenarios through the public API.

use twojug::core::JugState;
use twojug::response::{respond, Query};
use twojug::{solve, SearchOptions, Solver, SolverBuilder};

#[test]
fn measures_two_with_four_and_three() {
    let steps = solve(4, 3, 2).unwrap();

    assert_eq!(steps.len(), 4);
    let levels: Vec<_> = steps.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(levels, vec![(0, 3), (3, 0), (3, 3), (4, 2)]);

    let last = steps.last().unwrap();
    assert!(last.x == 2 || last.y == 2);
}

#[test]
fn single_bucket_fills_directly() {
    let steps = solve(0, 5, 5).unwrap();

    assert_eq!(steps.len(), 1);
    assert_eq!((steps[0].x, steps[0].y), (0, 5));
    assert_eq!(steps[0].title, "Fill bucket Y");
}

#[test]
fn odd_amount_with_even_buckets_is_unreachable() {
    assert!(solve(2, 2, 1).is_none());
}

#[test]
fn target_larger_than_both_buckets_is_rejected() {
    assert!(solve(6, 4, 8).is_none());

    let stats = Solver::default().solve_with_stats(6, 4, 8);
    assert!(stats.is_none(), "no search should run for rejected input");
}

#[test]
fn classic_die_hard_puzzle() {
    // 5 and 3 gallon jugs, measure 4
    let steps = solve(5, 3, 4).unwrap();

    assert_eq!(steps.len(), 6);
    assert_eq!(steps.last().map(|s| (s.x, s.y)), Some((4, 3)));
}

#[test]
fn target_equal_to_capacity_takes_one_fill() {
    let steps = solve(7, 3, 7).unwrap();

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].title, "Fill bucket X");
}

#[test]
fn negative_capacity_behaves_like_empty_bucket() {
    assert_eq!(solve(-3, 5, 5), solve(0, 5, 5));
    assert!(solve(-3, 5, 2).is_none());
}

#[test]
fn outcome_reports_statistics() {
    let outcome = Solver::default().solve_with_stats(4, 3, 2).unwrap();

    assert_eq!(outcome.best_len(), Some(4));
    assert_eq!(outcome.final_state(), Some(JugState::new(4, 2)));
    assert_eq!(outcome.stats().nodes_explored, 210);
    assert_eq!(outcome.stats().backtracks, 210);
}

#[test]
fn fast_options_explore_fewer_nodes() {
    let exhaustive = Solver::default().solve_with_stats(9, 4, 6).unwrap();
    let fast = Solver::new(SearchOptions::fast())
        .solve_with_stats(9, 4, 6)
        .unwrap();

    assert_eq!(fast.best_len(), exhaustive.best_len());
    assert!(fast.stats().nodes_explored < exhaustive.stats().nodes_explored);
}

#[test]
fn solver_can_be_shared_across_threads() {
    let solver = SolverBuilder::new().prune_bound(true).build();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4)
            .map(|target| {
                let solver = &solver;
                scope.spawn(move || solver.solve(4, 3, target))
            })
            .collect();

        for (target, handle) in (1..=4).zip(handles) {
            let steps = handle.join().unwrap();
            assert_eq!(steps, solve(4, 3, target));
        }
    });
}

#[test]
fn transport_round_trip() {
    let query = Query::from_json(r#"{"xCapacity":4,"yCapacity":3,"amountWanted":2}"#).unwrap();
    let body = respond(&query).to_json().unwrap();

    assert!(body.starts_with(r#"{"status":"found","steps":[{"x":0,"y":3,"title":"Fill bucket Y"}"#));

    let query = Query::from_json(r#"{"xCapacity":6,"yCapacity":4,"amountWanted":8}"#).unwrap();
    assert_eq!(respond(&query).to_json().unwrap(), r#"{"status":"not-found"}"#);
}
