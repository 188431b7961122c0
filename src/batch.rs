//! Independent solves over many requests.
//!
//! Requests share nothing, so with the `parallel` feature they are spread
//! across the rayon thread pool. Output order always matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SolverConfig;
use crate::error::Result;
use crate::result::SolveResult;
use crate::solver::{SolveRequest, Solver};

/// Solves every request independently.
///
/// A failure in one request does not affect the others.
///
/// # Examples
///
/// ```
/// use fleetroute::batch::solve_batch;
/// use fleetroute::config::SolverConfig;
/// use fleetroute::solver::SolveRequest;
///
/// let requests = vec![
///     SolveRequest::new(vec![vec![0.0, 2.0], vec![2.0, 0.0]], 1),
///     SolveRequest::new(vec![vec![0.0, 2.0], vec![2.0, 0.0]], 0),
/// ];
/// let results = solve_batch(&requests, &SolverConfig::default());
/// assert_eq!(results[0].as_ref().unwrap().total_distance, 4.0);
/// assert!(results[1].is_err());
/// ```
pub fn solve_batch(requests: &[SolveRequest], config: &SolverConfig) -> Vec<Result<SolveResult>> {
    let solver = Solver::new(config.clone());
    log::debug!("solving batch of {} requests", requests.len());

    #[cfg(feature = "parallel")]
    {
        requests
            .par_iter()
            .map(|request| solver.solve_request(request))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        requests
            .iter()
            .map(|request| solver.solve_request(request))
            .collect()
    }
}
