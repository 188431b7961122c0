//! End-to-end scenarios against the public entry point.

use fleetroute::config::SolverConfig;
use fleetroute::result::LoadBand;
use fleetroute::{solve, EngineError, Solver};

#[test]
fn two_stops_tied_orientation_follows_construction() {
    let matrix = vec![
        vec![0.0, 2.0, 5.0],
        vec![2.0, 0.0, 1.0],
        vec![5.0, 1.0, 0.0],
    ];
    let result = solve(&matrix, 1, None, None).expect("solvable");
    assert_eq!(result.routes.len(), 1);
    assert_eq!(result.routes[0].node_indices, vec![0, 1, 2, 0]);
    assert_eq!(result.routes[0].total_distance, 8.0);
    assert_eq!(result.total_distance, 8.0);
}

#[test]
fn two_stops_unique_optimum() {
    let matrix = vec![
        vec![0.0, 2.0, 9.0],
        vec![2.0, 0.0, 1.0],
        vec![9.0, 1.0, 0.0],
    ];
    let result = solve(&matrix, 1, None, None).expect("solvable");
    assert_eq!(result.routes[0].node_indices, vec![0, 1, 2, 0]);
    assert_eq!(result.total_distance, 12.0);
}

#[test]
fn asymmetric_one_way_street() {
    // 1 -> 2 is cheap but 2 -> 1 is not, so the tour must run 0 -> 1 -> 2 -> 0
    let matrix = vec![
        vec![0.0, 4.0, 4.0],
        vec![4.0, 0.0, 1.0],
        vec![4.0, 20.0, 0.0],
    ];
    let result = solve(&matrix, 1, None, None).expect("solvable");
    assert_eq!(result.routes[0].node_indices, vec![0, 1, 2, 0]);
    assert_eq!(result.total_distance, 9.0);
}

#[test]
fn total_demand_over_single_vehicle_capacity() {
    let matrix = vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 1.0, 2.0],
        vec![2.0, 1.0, 0.0, 1.0],
        vec![3.0, 2.0, 1.0, 0.0],
    ];
    let err = solve(&matrix, 1, Some(&[5.0, 5.0, 5.0]), Some(&[10.0])).unwrap_err();
    assert!(matches!(err, EngineError::InfeasibleDemand { .. }));
    assert_eq!(err.kind(), "InfeasibleDemand");
}

#[test]
fn matrix_larger_than_declared_stops() {
    let matrix = vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 1.0, 2.0],
        vec![2.0, 1.0, 0.0, 1.0],
        vec![3.0, 2.0, 1.0, 0.0],
    ];
    let err = solve(&matrix, 1, Some(&[1.0, 1.0]), None).unwrap_err();
    assert!(matches!(err, EngineError::DimensionMismatch { .. }));
}

#[test]
fn zero_vehicles_rejected() {
    let err = solve(&[vec![0.0]], 0, None, None).unwrap_err();
    assert!(matches!(err, EngineError::InvalidParameter(_)));
}

#[test]
fn negative_capacity_rejected() {
    let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
    let err = solve(&matrix, 2, None, Some(&[3.0, -3.0])).unwrap_err();
    assert!(matches!(err, EngineError::InvalidParameter(_)));
}

#[test]
fn depot_only_yields_empty_routes() {
    let result = solve(&[vec![0.0]], 3, None, None).expect("solvable");
    assert_eq!(result.routes.len(), 3);
    for (id, route) in result.routes.iter().enumerate() {
        assert_eq!(route.vehicle_id, id);
        assert_eq!(route.node_indices, vec![0, 0]);
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.duration, 0.0);
        assert_eq!(route.load_band, LoadBand::Unused);
    }
    assert_eq!(result.total_distance, 0.0);
    assert_eq!(result.vehicles_used(), 0);
}

#[test]
fn single_stop_is_trivial_round_trip() {
    let matrix = vec![vec![0.0, 7.5], vec![6.5, 0.0]];
    let result = solve(&matrix, 1, None, None).expect("solvable");
    assert_eq!(result.routes[0].node_indices, vec![0, 1, 0]);
    assert_eq!(result.routes[0].total_distance, 14.0);
    assert_eq!(result.routes[0].open_distance(), 7.5);
}

#[test]
fn capacity_splits_clusters_across_vehicles() {
    // Two clusters: {1, 2} to the east, {3, 4} to the west
    let matrix = vec![
        vec![0.0, 10.0, 11.0, 10.0, 11.0],
        vec![10.0, 0.0, 1.0, 20.0, 21.0],
        vec![11.0, 1.0, 0.0, 21.0, 22.0],
        vec![10.0, 20.0, 21.0, 0.0, 1.0],
        vec![11.0, 21.0, 22.0, 1.0, 0.0],
    ];
    let result = solve(
        &matrix,
        2,
        Some(&[1.0, 1.0, 1.0, 1.0]),
        Some(&[2.0, 2.0]),
    )
    .expect("solvable");

    let mut groups: Vec<Vec<usize>> = result
        .routes
        .iter()
        .map(|r| {
            let mut stops = r.node_indices[1..r.node_indices.len() - 1].to_vec();
            stops.sort_unstable();
            stops
        })
        .collect();
    groups.sort();
    assert_eq!(groups, vec![vec![1, 2], vec![3, 4]]);
    assert!(result.routes.iter().all(|r| r.load_used <= 2.0));
    assert_eq!(result.total_distance, 44.0);
}

#[test]
fn unreachable_pair_is_avoided_when_possible() {
    let inf = f64::INFINITY;
    let matrix = vec![
        vec![0.0, 3.0, 3.0],
        vec![3.0, 0.0, inf],
        vec![3.0, 2.0, 0.0],
    ];
    let result = solve(&matrix, 1, None, None).expect("solvable");
    assert_eq!(result.routes[0].node_indices, vec![0, 2, 1, 0]);
    assert!(!result.routes[0].has_unreachable_leg);
    assert_eq!(result.total_distance, 8.0);
}

#[test]
fn duration_cost_and_bands_follow_config() {
    let matrix: Vec<Vec<f64>> = (0..7)
        .map(|i: i32| (0..7).map(|j: i32| (i - j).abs() as f64).collect())
        .collect();
    let solver = Solver::new(
        SolverConfig::new()
            .with_average_speed(30.0)
            .with_cost_per_distance(0.25),
    );
    let result = solver.solve(&matrix, 1, None, None).expect("solvable");
    let route = &result.routes[0];
    assert_eq!(route.node_indices, vec![0, 1, 2, 3, 4, 5, 6, 0]);
    assert_eq!(route.total_distance, 12.0);
    assert_eq!(route.duration, 24.0);
    assert_eq!(route.cost, 3.0);
    assert_eq!(route.load_band, LoadBand::Heavy);
}
