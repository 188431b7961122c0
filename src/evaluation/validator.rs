//! Structural and feasibility checks on a finished solution.

use crate::error::{EngineError, Result};
use crate::models::{Problem, Solution, Violation, ViolationType, DEPOT};

/// Checks a solution against the problem and returns every violation found.
///
/// Verifies that:
/// - there is exactly one route per vehicle;
/// - every route starts and ends at the depot and visits only valid stops;
/// - every stop is served exactly once across all routes;
/// - every route's accumulated demand is within its vehicle's capacity.
///
/// Loads are recomputed from the problem's demands rather than read from
/// the routes.
///
/// # Examples
///
/// ```
/// use fleetroute::models::{Problem, Route, Solution, ViolationType};
/// use fleetroute::evaluation::validate;
///
/// let problem = Problem::from_rows(
///     &[vec![0.0, 1.0, 1.0], vec![1.0, 0.0, 1.0], vec![1.0, 1.0, 0.0]],
///     None,
///     1,
///     None,
/// )
/// .unwrap();
/// let mut route = Route::new(0);
/// route.insert(0, 1, 0.0);
/// let violations = validate(&problem, &Solution::with_routes(vec![route]));
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].kind, ViolationType::MissingStop { stop: 2 });
/// ```
pub fn validate(problem: &Problem, solution: &Solution) -> Vec<Violation> {
    let mut violations = Vec::new();
    let num_nodes = problem.num_nodes();
    let vehicles = problem.vehicles();

    if solution.num_routes() != vehicles.len() {
        violations.push(Violation::new(ViolationType::FleetSizeMismatch {
            expected: vehicles.len(),
            actual: solution.num_routes(),
        }));
    }

    let mut visits = vec![0usize; num_nodes];

    for (route_index, route) in solution.routes().iter().enumerate() {
        let nodes = route.node_indices();
        if nodes.first() != Some(&DEPOT) || nodes.last() != Some(&DEPOT) {
            violations.push(Violation::new(ViolationType::OpenRoute { route_index }));
        }

        let mut load = 0.0;
        for &node in route.stops() {
            if node == DEPOT || node >= num_nodes {
                violations.push(Violation::new(ViolationType::InvalidNode { route_index, node }));
                continue;
            }
            visits[node] += 1;
            load += problem.demand(node);
        }

        if let Some(vehicle) = vehicles.get(route_index) {
            if !vehicle.can_carry(load) {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index,
                    load,
                    capacity: vehicle.capacity().unwrap_or(f64::INFINITY),
                }));
            }
        }
    }

    for stop in problem.stops() {
        match visits[stop] {
            1 => {}
            0 => violations.push(Violation::new(ViolationType::MissingStop { stop })),
            occurrences => violations.push(Violation::new(ViolationType::DuplicateStop {
                stop,
                occurrences,
            })),
        }
    }

    violations
}

/// Fails with `InternalInvariantViolation` if [`validate`] finds anything.
pub fn ensure_valid(problem: &Problem, solution: &Solution) -> Result<()> {
    let violations = validate(problem, solution);
    if violations.is_empty() {
        return Ok(());
    }
    for v in &violations {
        log::error!("solution invariant violated: {}", v);
    }
    Err(EngineError::InternalInvariantViolation { violations })
}
