//! Inter-route stop relocation operator.
//!
//! # Algorithm
//!
//! Tries moving each stop from its current route to every position of every
//! other route. A move is accepted when it strictly reduces the combined
//! distance of the two routes and the destination vehicle can carry the
//! extra demand:
//!
//! ```text
//! delta = removal(from, pos) + insertion(to, pos', stop)
//! ```
//!
//! Scan order is source route, source position, destination route,
//! destination position, all ascending. The first improving move is
//! committed and the scan restarts from the beginning.
//!
//! # Complexity
//!
//! O(n² × R) per scan where n = stops, R = routes.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::IMPROVEMENT_EPS;
use crate::models::{Problem, Route, Solution};

/// A relocate move: move a stop from one route to another.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RelocateMove {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
}

/// Applies inter-route relocation until no improving move remains.
///
/// Returns the number of moves committed. Every committed move keeps the
/// destination route within its vehicle's capacity.
///
/// # Examples
///
/// ```
/// use fleetroute::models::{Problem, Route, Solution};
/// use fleetroute::local_search::relocate_improve;
///
/// // Stops 1 and 2 sit together; stop 2 starts on the wrong vehicle.
/// let problem = Problem::from_rows(
///     &[
///         vec![0.0, 10.0, 10.0],
///         vec![10.0, 0.0, 1.0],
///         vec![10.0, 1.0, 0.0],
///     ],
///     None,
///     2,
///     None,
/// )
/// .unwrap();
/// let mut a = Route::new(0);
/// a.insert(0, 1, 0.0);
/// let mut b = Route::new(1);
/// b.insert(0, 2, 0.0);
/// let mut solution = Solution::with_routes(vec![a, b]);
///
/// let moves = relocate_improve(&mut solution, &problem);
/// assert_eq!(moves, 1);
/// assert_eq!(solution.total_distance(problem.distances()), 21.0);
/// ```
pub fn relocate_improve(solution: &mut Solution, problem: &Problem) -> usize {
    if solution.num_routes() < 2 {
        return 0;
    }
    let mut moves = 0;
    while apply_first_improving(solution.routes_mut(), problem) {
        moves += 1;
    }
    moves
}

/// Scans for the first strictly improving relocation and applies it.
fn apply_first_improving(routes: &mut [Route], problem: &Problem) -> bool {
    let distances = problem.distances();
    let vehicles = problem.vehicles();

    for from_r in 0..routes.len() {
        for from_pos in 0..routes[from_r].len() {
            let stop = routes[from_r].stops()[from_pos];
            let demand = problem.demand(stop);
            let removal = routes[from_r].removal_cost(from_pos, distances);

            for to_r in 0..routes.len() {
                if to_r == from_r {
                    continue;
                }
                if !vehicles[to_r].can_carry(routes[to_r].load() + demand) {
                    continue;
                }

                for to_pos in 0..=routes[to_r].len() {
                    let insertion = routes[to_r].insertion_cost(to_pos, stop, distances);
                    if removal + insertion >= -IMPROVEMENT_EPS {
                        continue;
                    }
                    let mv = RelocateMove {
                        from_route: from_r,
                        from_pos,
                        to_route: to_r,
                        to_pos,
                    };
                    if try_commit(routes, problem, mv) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// Applies `mv` and keeps it only if the recomputed distance of the two
/// routes drops by more than the tolerance.
fn try_commit(routes: &mut [Route], problem: &Problem, mv: RelocateMove) -> bool {
    let distances = problem.distances();
    let before = routes[mv.from_route].distance(distances) + routes[mv.to_route].distance(distances);

    let stop = routes[mv.from_route].stops()[mv.from_pos];
    let demand = problem.demand(stop);
    routes[mv.from_route].remove(mv.from_pos, demand);
    routes[mv.to_route].insert(mv.to_pos, stop, demand);

    let after = routes[mv.from_route].distance(distances) + routes[mv.to_route].distance(distances);
    if after < before - IMPROVEMENT_EPS {
        log::trace!(
            "relocate stop {} from route {} to route {} at {}: {:.4} -> {:.4}",
            stop,
            mv.from_route,
            mv.to_route,
            mv.to_pos,
            before,
            after
        );
        return true;
    }

    routes[mv.to_route].remove(mv.to_pos, demand);
    routes[mv.from_route].insert(mv.from_pos, stop, demand);
    false
}
