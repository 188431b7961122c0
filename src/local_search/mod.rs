//! Local search for improving constructed solutions.
//!
//! - [`two_opt`] — Intra-route 2-opt segment reversal (asymmetric-aware)
//! - [`relocate`] — Inter-route stop relocation under capacity
//! - [`optimize`] — Alternates both until a fixed point or the pass budget

mod relocate;
mod two_opt;

pub use relocate::relocate_improve;
pub use two_opt::two_opt_improve;

use crate::models::{Problem, Solution};

/// Minimum distance reduction for a move to count as an improvement.
pub(crate) const IMPROVEMENT_EPS: f64 = 1e-9;

/// Improves a solution with alternating 2-opt and relocate passes.
///
/// One pass runs 2-opt on every route (in route order), then relocation
/// across routes. The search stops after the first pass that commits no
/// move, or after `max_passes` passes. The returned solution never has a
/// larger total distance than `initial`, serves the same stops, and keeps
/// every route within capacity.
///
/// # Examples
///
/// ```
/// use fleetroute::models::Problem;
/// use fleetroute::constructive::cheapest_insertion;
/// use fleetroute::local_search::optimize;
///
/// let problem = Problem::from_rows(
///     &[
///         vec![0.0, 3.0, 4.0, 5.0],
///         vec![3.0, 0.0, 5.0, 4.0],
///         vec![4.0, 5.0, 0.0, 3.0],
///         vec![5.0, 4.0, 3.0, 0.0],
///     ],
///     None,
///     2,
///     None,
/// )
/// .unwrap();
/// let initial = cheapest_insertion(&problem).unwrap();
/// let improved = optimize(&problem, &initial, 200);
/// let d = problem.distances();
/// assert!(improved.total_distance(d) <= initial.total_distance(d));
/// assert_eq!(improved.num_served(), 3);
/// ```
pub fn optimize(problem: &Problem, initial: &Solution, max_passes: usize) -> Solution {
    let distances = problem.distances();
    let mut current = initial.clone();
    let mut converged = max_passes == 0;

    for pass in 0..max_passes {
        let intra: usize = current
            .routes_mut()
            .iter_mut()
            .map(|route| two_opt_improve(route, distances))
            .sum();
        let inter = relocate_improve(&mut current, problem);

        log::debug!(
            "pass {}: {} 2-opt, {} relocate, distance {:.4}",
            pass + 1,
            intra,
            inter,
            current.total_distance(distances)
        );

        if intra == 0 && inter == 0 {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "local search stopped at the pass budget ({}) before converging",
            max_passes
        );
    }

    current
}
