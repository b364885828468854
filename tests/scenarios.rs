//! End-to-end scenarios through the public `solve` entry point.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fleet_routing::config::{SolverConfig, TimeBudget};
use fleet_routing::distance::{acquire_time_matrix, AcquisitionError, Coordinate, MatrixSource};
use fleet_routing::{solve, Infeasibility, RoutingError, Solution, Solver};

/// Depot between two clusters: {1, 2} on one side, {3, 4} on the other.
fn two_clusters() -> Vec<Vec<i64>> {
    vec![
        vec![0, 10, 12, 11, 13],
        vec![10, 0, 3, 21, 23],
        vec![12, 3, 0, 23, 25],
        vec![11, 21, 23, 0, 3],
        vec![13, 23, 25, 3, 0],
    ]
}

/// Seeded symmetric instance with `n` nodes and travel times in `30..=600`.
fn random_instance(n: usize, seed: u64) -> Vec<Vec<i64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let t = rng.random_range(30..=600);
            m[i][j] = t;
            m[j][i] = t;
        }
    }
    m
}

fn assert_covers_all_stops(sol: &Solution, n: usize) {
    let mut served: Vec<usize> = sol
        .routes
        .values()
        .flat_map(|r| r[1..r.len() - 1].iter().copied())
        .collect();
    served.sort_unstable();
    assert_eq!(served, (1..n).collect::<Vec<_>>());
}

#[test]
fn test_scenario_a_single_stop() {
    let sol = solve(vec![vec![0, 10], vec![10, 0]], 1, 900, 9000).expect("feasible");
    assert_eq!(sol.routes.len(), 1);
    assert_eq!(sol.routes[&0], vec![0, 1, 0]);
    assert_eq!(sol.route_time_seconds[&0], 20);
    assert_eq!(sol.max_route_time_seconds, 20);
    assert_eq!(sol.total_time_seconds, 20);
}

#[test]
fn test_scenario_b_round_trip_over_budget() {
    let matrix = vec![
        vec![0, 10, 10, 10],
        vec![10, 0, 10, 10],
        vec![10, 10, 0, 10],
        vec![10, 10, 10, 0],
    ];
    let err = solve(matrix.clone(), 1, 60, 30).unwrap_err();
    assert_eq!(
        err,
        RoutingError::NoFeasibleSolution(Infeasibility::ReturnLegOverflow {
            vehicle: 0,
            route_time: 40,
            max_travel_time: 30,
        })
    );

    let err = solve(matrix, 1, 60, 25).unwrap_err();
    assert!(matches!(
        err,
        RoutingError::NoFeasibleSolution(Infeasibility::NoFeasibleArc {
            vehicle: 0,
            stop: 3,
            unassigned: 1,
            ..
        })
    ));
}

#[test]
fn test_scenario_c_clusters_are_balanced() {
    let sol = solve(two_clusters(), 2, 900, 9000).expect("feasible");
    assert_eq!(sol.routes[&0], vec![0, 1, 2, 0]);
    assert_eq!(sol.routes[&1], vec![0, 3, 4, 0]);

    let spread = sol.max_route_time_seconds - sol.min_route_time_seconds();
    // One vehicle doing both clusters: 0-1-2-3-4-0 = 52s against an idle one.
    let unbalanced_spread = 52;
    assert_eq!(spread, 2);
    assert!(spread < unbalanced_spread);
    assert_eq!(sol.objective_value, 52 + 100 * 2);
}

#[test]
fn test_scenario_d_ragged_matrix() {
    let matrix = vec![vec![0, 1, 2], vec![1, 0], vec![2, 1, 0]];
    let err = solve(matrix, 1, 60, 600).unwrap_err();
    assert_eq!(
        err,
        RoutingError::InvalidMatrixShape {
            rows: 3,
            row: 1,
            len: 2,
        }
    );
    assert!(err.is_input_error());
}

#[test]
fn test_negative_travel_time() {
    let err = solve(vec![vec![0, 5], vec![-1, 0]], 1, 60, 600).unwrap_err();
    assert_eq!(
        err,
        RoutingError::NegativeTravelTime {
            from: 1,
            to: 0,
            value: -1,
        }
    );
}

#[test]
fn test_huge_route_times_saturate_total() {
    let m = i64::MAX;
    let matrix = vec![vec![0, m - 2, m - 1], vec![m, 0, m], vec![m, m, 0]];
    let sol = solve(matrix, 2, 1, u64::MAX).expect("each route fits the cap");

    let m = i64::MAX as u64;
    assert_eq!(sol.routes[&0], vec![0, 1, 0]);
    assert_eq!(sol.routes[&1], vec![0, 2, 0]);
    assert_eq!(sol.route_time_seconds[&0], 2 * m - 2);
    assert_eq!(sol.route_time_seconds[&1], 2 * m - 1);
    assert_eq!(sol.max_route_time_seconds, 2 * m - 1);
    assert_eq!(sol.total_time_seconds, u64::MAX);
    assert_eq!(sol.objective_value, u64::MAX);
}

#[test]
fn test_idle_vehicles_report_empty_routes() {
    let sol = solve(vec![vec![0, 10], vec![10, 0]], 3, 60, 600).expect("feasible");
    assert_eq!(sol.routes[&1], vec![0, 0]);
    assert_eq!(sol.routes[&2], vec![0, 0]);
    assert_eq!(sol.route_time_seconds[&1], 0);
    assert_eq!(sol.num_used_vehicles(), 1);
}

#[test]
fn test_more_vehicles_never_lengthen_longest_route() {
    let maxima: Vec<u64> = (1..=4)
        .map(|v| {
            solve(two_clusters(), v, 900, 9000)
                .expect("feasible")
                .max_route_time_seconds
        })
        .collect();
    assert_eq!(maxima[0], 52);
    assert!(maxima.windows(2).all(|w| w[1] <= w[0]), "{maxima:?}");
}

#[test]
fn test_more_vehicles_on_random_instance() {
    let matrix = random_instance(25, 11);
    let solver = Solver::new(SolverConfig::default().with_local_search(true));
    let budget = TimeBudget::new(900, 1_000_000);
    let one = solver.solve(&matrix, 1, budget).expect("feasible");
    let three = solver.solve(&matrix, 3, budget).expect("feasible");
    assert!(three.max_route_time_seconds <= one.max_route_time_seconds);
}

#[test]
fn test_random_instance_is_deterministic() {
    let matrix = random_instance(40, 7);
    let a = solve(matrix.clone(), 4, 900, 1_000_000).expect("feasible");
    let b = solve(matrix, 4, 900, 1_000_000).expect("feasible");
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("serializes"),
        serde_json::to_string(&b).expect("serializes")
    );
    assert_covers_all_stops(&a, 40);
}

#[test]
fn test_local_search_improves_objective_within_budget() {
    let matrix = random_instance(30, 3);
    let budget = TimeBudget::new(900, 1_000_000);
    let built = Solver::default().solve(&matrix, 3, budget).expect("feasible");
    let improved = Solver::new(SolverConfig::default().with_local_search(true))
        .solve(&matrix, 3, budget)
        .expect("feasible");

    assert!(improved.objective_value <= built.objective_value);
    assert_covers_all_stops(&improved, 30);
    for t in improved.route_time_seconds.values() {
        assert!(*t <= budget.max_travel_time_seconds);
    }
}

/// Travel time is 60s per unit of latitude difference.
struct GridSource;

impl MatrixSource for GridSource {
    fn fetch_rows(
        &self,
        origins: &[Coordinate],
        destinations: &[Coordinate],
    ) -> Result<Vec<Vec<i64>>, AcquisitionError> {
        Ok(origins
            .iter()
            .map(|o| {
                destinations
                    .iter()
                    .map(|d| ((o.lat - d.lat).abs() * 60.0) as i64)
                    .collect()
            })
            .collect())
    }
}

#[test]
fn test_acquired_matrix_feeds_solver() {
    let coords: Vec<Coordinate> = (0..15).map(|i| Coordinate::new(i as f64, 0.0)).collect();
    let matrix = acquire_time_matrix(&GridSource, &coords).expect("acquired");
    assert_eq!(matrix.len(), 15);

    let sol = solve(matrix, 2, 900, 9000).expect("feasible");
    assert_covers_all_stops(&sol, 15);
    // Stops are on a line: the first vehicle walks outwards one unit at a time.
    assert_eq!(sol.routes[&0], (0..15).chain([0]).collect::<Vec<_>>());
}
