//! Seeded larger instances: identical inputs give bit-identical output.

use fleetroute::batch::solve_batch;
use fleetroute::config::SolverConfig;
use fleetroute::solver::{SolveRequest, Solver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Euclidean instance with `stops` random points around a central depot.
fn euclidean_request(seed: u64, stops: usize, vehicles: usize) -> SolveRequest {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = vec![(50.0, 50.0)];
    for _ in 0..stops {
        points.push((rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)));
    }
    let matrix: Vec<Vec<f64>> = points
        .iter()
        .map(|&(x1, y1): &(f64, f64)| {
            points
                .iter()
                .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                .collect()
        })
        .collect();
    let demands: Vec<f64> = (0..stops).map(|_| rng.random_range(1..=5) as f64).collect();
    let total: f64 = demands.iter().sum();
    let capacity = (total / vehicles as f64 * 1.5).ceil();

    SolveRequest::new(matrix, vehicles)
        .with_demands(demands)
        .with_capacities(vec![capacity; vehicles])
}

#[test]
fn repeated_solves_are_bit_identical() {
    let request = euclidean_request(7, 30, 4);
    let solver = Solver::default();
    let a = solver.solve_request(&request).expect("feasible");
    let b = solver.solve_request(&request).expect("feasible");

    assert_eq!(a, b);
    assert_eq!(a.total_distance.to_bits(), b.total_distance.to_bits());
    assert_eq!(
        serde_json::to_string(&a).expect("serializable"),
        serde_json::to_string(&b).expect("serializable")
    );
    assert_eq!(a.stops_served(), 30);
    assert_eq!(a.routes.len(), 4);
}

#[test]
fn batch_matches_sequential_solves() {
    let requests: Vec<SolveRequest> = (0..6).map(|seed| euclidean_request(seed, 20, 3)).collect();
    let config = SolverConfig::default();
    let solver = Solver::new(config.clone());

    let batch = solve_batch(&requests, &config);
    for (request, result) in requests.iter().zip(batch) {
        assert_eq!(result, solver.solve_request(request));
    }
}

#[test]
fn per_request_config_overrides_solver() {
    let request = euclidean_request(11, 15, 2)
        .with_config(SolverConfig::new().with_cost_per_distance(2.0));
    let result = Solver::default().solve_request(&request).expect("feasible");
    assert!((result.total_cost - 2.0 * result.total_distance).abs() < 1e-6);
}
