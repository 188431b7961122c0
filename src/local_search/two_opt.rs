//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of stop positions `i < j`, evaluate reversing the segment
//! `route[i..=j]`. The boundary edges change as in the symmetric case:
//!
//! ```text
//! boundary = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! and, because the matrix may be asymmetric, every edge inside the segment
//! is now traversed backwards:
//!
//! ```text
//! internal = Σ_{k=i..j-1} d(r[k+1], r[k]) - d(r[k], r[k+1])
//! ```
//!
//! Pairs are scanned in ascending `(i, j)` order. The first reversal that
//! strictly reduces the route distance is applied and the scan restarts on
//! the same route, until no improving reversal remains (first-improvement).
//!
//! # Complexity
//!
//! O(n²) per scan; the internal term is accumulated incrementally over `j`.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::IMPROVEMENT_EPS;
use crate::distance::DistanceMatrix;
use crate::models::{Route, DEPOT};

/// Applies 2-opt to a single route until it is 2-opt optimal.
///
/// Returns the number of reversals committed. Stops and load are unchanged;
/// only the visiting order is.
///
/// # Examples
///
/// ```
/// use fleetroute::distance::DistanceMatrix;
/// use fleetroute::local_search::two_opt_improve;
/// use fleetroute::models::Route;
///
/// // Four stops on a line, visited out of order
/// let rows: Vec<Vec<f64>> = (0..5)
///     .map(|i: i32| (0..5).map(|j: i32| (i - j).abs() as f64).collect())
///     .collect();
/// let dm = DistanceMatrix::from_rows(&rows).unwrap();
///
/// let mut route = Route::new(0);
/// for (pos, stop) in [1, 3, 2, 4].into_iter().enumerate() {
///     route.insert(pos, stop, 0.0);
/// }
/// let moves = two_opt_improve(&mut route, &dm);
/// assert!(moves > 0);
/// assert_eq!(route.distance(&dm), 8.0);
/// ```
pub fn two_opt_improve(route: &mut Route, distances: &DistanceMatrix) -> usize {
    let mut moves = 0;
    while apply_first_improving(route, distances) {
        moves += 1;
    }
    moves
}

/// Scans for the first strictly improving reversal and applies it.
fn apply_first_improving(route: &mut Route, distances: &DistanceMatrix) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }
    let current = route.distance(distances);

    for i in 0..n - 1 {
        let mut internal = 0.0;
        for j in i + 1..n {
            let stops = route.stops();
            internal += distances.get(stops[j], stops[j - 1]) - distances.get(stops[j - 1], stops[j]);
            let delta = boundary_delta(stops, distances, i, j) + internal;
            if delta < -IMPROVEMENT_EPS {
                route.reverse(i, j);
                let after = route.distance(distances);
                if after < current - IMPROVEMENT_EPS {
                    log::trace!(
                        "2-opt reverse [{}..={}] on route {}: {:.4} -> {:.4}",
                        i,
                        j,
                        route.vehicle_id(),
                        current,
                        after
                    );
                    return true;
                }
                route.reverse(i, j);
            }
        }
    }
    false
}

/// Change in the two boundary edges when reversing `route[i..=j]`.
///
/// Before: ...-prev_i - route[i] - ... - route[j] - next_j-...
/// After:  ...-prev_i - route[j] - ... - route[i] - next_j-...
fn boundary_delta(route: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = route.len();
    let prev_i = if i == 0 { DEPOT } else { route[i - 1] };
    let next_j = if j == n - 1 { DEPOT } else { route[j + 1] };

    let old_cost = distances.get(prev_i, route[i]) + distances.get(route[j], next_j);
    let new_cost = distances.get(prev_i, route[j]) + distances.get(route[i], next_j);

    new_cost - old_cost
}
