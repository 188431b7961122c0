//! Greedy cheapest-insertion construction over a fixed fleet.
//!
//! # Algorithm
//!
//! Stops are taken in ascending order of their cost from the depot (ties by
//! ascending node index). Each stop goes to the route with the smallest
//! current total distance among those that can still carry its demand
//! (ties by ascending vehicle index), at the position with the smallest
//! marginal cost increase:
//!
//! ```text
//! delta(pos) = d(prev, stop) + d(stop, next) - d(prev, next)
//! ```
//!
//! The fleet size is fixed. A stop that fits no route fails the whole
//! construction. There is no randomness and no backtracking.
//!
//! # Complexity
//!
//! O(n² + n·m) where n = stops, m = vehicles.

use crate::error::{EngineError, Result};
use crate::models::{Problem, Route, Solution, DEPOT};

/// Builds an initial solution with exactly one route per vehicle.
///
/// Every stop is assigned exactly once and every route respects its
/// vehicle's capacity. Vehicles that receive no stop keep an empty route.
///
/// # Errors
///
/// `InfeasibleDemand` naming the first stop (in construction order) for
/// which no vehicle has enough spare capacity.
///
/// # Examples
///
/// ```
/// use fleetroute::models::Problem;
/// use fleetroute::constructive::cheapest_insertion;
///
/// let problem = Problem::from_rows(
///     &[
///         vec![0.0, 2.0, 9.0],
///         vec![2.0, 0.0, 1.0],
///         vec![9.0, 1.0, 0.0],
///     ],
///     None,
///     1,
///     None,
/// )
/// .unwrap();
///
/// let solution = cheapest_insertion(&problem).unwrap();
/// assert_eq!(solution.routes()[0].node_indices(), vec![0, 1, 2, 0]);
/// ```
pub fn cheapest_insertion(problem: &Problem) -> Result<Solution> {
    let distances = problem.distances();
    let stops: Vec<usize> = problem.stops().collect();
    let order = distances.sorted_by_distance_from(DEPOT, &stops);

    let mut routes: Vec<Route> = problem
        .vehicles()
        .iter()
        .map(|v| Route::new(v.id()))
        .collect();
    let mut lengths = vec![0.0; routes.len()];

    for stop in order {
        let demand = problem.demand(stop);
        let Some(target) = select_route(problem, &routes, &lengths, demand) else {
            let spare = routes
                .iter()
                .zip(problem.vehicles())
                .map(|(route, vehicle)| vehicle.remaining(route.load()))
                .fold(0.0, f64::max);
            log::debug!(
                "stop {} (demand {}) fits no vehicle, largest spare capacity {}",
                stop,
                demand,
                spare
            );
            return Err(EngineError::InfeasibleDemand { stop, demand });
        };

        let route = &mut routes[target];
        let (pos, delta) = route.cheapest_insertion(stop, distances);
        route.insert(pos, stop, demand);
        lengths[target] = route.distance(distances);

        log::trace!(
            "insert stop {} into route {} at {} (+{:.4})",
            stop,
            target,
            pos,
            delta
        );
    }

    Ok(Solution::with_routes(routes))
}

/// Shortest route (by current total distance) that can absorb `demand`.
fn select_route(problem: &Problem, routes: &[Route], lengths: &[f64], demand: f64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, (route, vehicle)) in routes.iter().zip(problem.vehicles()).enumerate() {
        if !vehicle.can_carry(route.load() + demand) {
            continue;
        }
        if best.is_none_or(|b| lengths[idx] < lengths[b]) {
            best = Some(idx);
        }
    }
    best
}
