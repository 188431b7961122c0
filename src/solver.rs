//! Engine entry point.
//!
//! A solve runs four stateless stages over a validated [`Problem`]:
//! cheapest-insertion construction, local search, validation, and result
//! assembly. Nothing is retained between calls, so independent solves may
//! run on separate threads without coordination.

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::constructive::cheapest_insertion;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::ensure_valid;
use crate::local_search::optimize;
use crate::models::Problem;
use crate::result::{assemble, SolveResult};

/// A self-contained solve request, as received over JSON boundaries.
///
/// # Examples
///
/// ```
/// use fleetroute::solver::SolveRequest;
///
/// let request: SolveRequest = serde_json::from_str(
///     r#"{"matrix": [[0, 2, 9], [2, 0, 1], [9, 1, 0]], "vehicle_count": 1}"#,
/// )
/// .unwrap();
/// assert_eq!(request.vehicle_count, 1);
/// assert!(request.demands.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Square travel-cost matrix, depot at index 0.
    pub matrix: Vec<Vec<f64>>,

    /// Number of vehicles (at least 1).
    pub vehicle_count: usize,

    /// One demand per stop; omitted means all zero.
    #[serde(default)]
    pub demands: Option<Vec<f64>>,

    /// One capacity per vehicle; omitted means unbounded.
    #[serde(default)]
    pub capacities: Option<Vec<f64>>,

    /// Per-request configuration; omitted means the solver's own.
    #[serde(default)]
    pub config: Option<SolverConfig>,
}

impl SolveRequest {
    /// Creates a request with zero demands and unbounded capacities.
    pub fn new(matrix: Vec<Vec<f64>>, vehicle_count: usize) -> Self {
        Self {
            matrix,
            vehicle_count,
            demands: None,
            capacities: None,
            config: None,
        }
    }

    /// Sets per-stop demands.
    pub fn with_demands(mut self, demands: Vec<f64>) -> Self {
        self.demands = Some(demands);
        self
    }

    /// Sets per-vehicle capacities.
    pub fn with_capacities(mut self, capacities: Vec<f64>) -> Self {
        self.capacities = Some(capacities);
        self
    }

    /// Sets a configuration that overrides the solver's.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Route optimization engine.
///
/// Holds only configuration; every call builds and discards its own
/// working state.
///
/// # Examples
///
/// ```
/// use fleetroute::config::SolverConfig;
/// use fleetroute::solver::Solver;
///
/// let solver = Solver::new(SolverConfig::new().with_average_speed(40.0));
/// let matrix = vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 1.0],
///     vec![9.0, 1.0, 0.0],
/// ];
/// let result = solver.solve(&matrix, 1, None, None).unwrap();
/// assert_eq!(result.routes[0].node_indices, vec![0, 1, 2, 0]);
/// assert_eq!(result.total_distance, 12.0);
/// assert_eq!(result.total_duration, 18.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates raw inputs and solves.
    pub fn solve(
        &self,
        matrix: &[Vec<f64>],
        vehicle_count: usize,
        demands: Option<&[f64]>,
        capacities: Option<&[f64]>,
    ) -> Result<SolveResult> {
        let problem = Problem::new(
            DistanceMatrix::from_rows(matrix)?,
            demands.map(<[f64]>::to_vec),
            vehicle_count,
            capacities.map(<[f64]>::to_vec),
        )?;
        self.solve_problem(&problem)
    }

    /// Solves an already validated problem.
    pub fn solve_problem(&self, problem: &Problem) -> Result<SolveResult> {
        solve_with(problem, &self.config)
    }

    /// Solves a request, honouring its configuration override.
    pub fn solve_request(&self, request: &SolveRequest) -> Result<SolveResult> {
        let config = request.config.as_ref().unwrap_or(&self.config);
        let problem = Problem::from_rows(
            &request.matrix,
            request.demands.clone(),
            request.vehicle_count,
            request.capacities.clone(),
        )?;
        solve_with(&problem, config)
    }
}

/// Solves with the default configuration.
///
/// `demands` has one entry per stop (matrix size − 1) and `capacities` one
/// per vehicle; either may be omitted.
///
/// # Examples
///
/// ```
/// use fleetroute::{solve, EngineError};
///
/// let matrix = vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ];
/// let err = solve(&matrix, 1, Some(&[5.0, 5.0, 5.0]), Some(&[10.0])).unwrap_err();
/// assert!(matches!(err, EngineError::InfeasibleDemand { .. }));
/// ```
pub fn solve(
    matrix: &[Vec<f64>],
    vehicle_count: usize,
    demands: Option<&[f64]>,
    capacities: Option<&[f64]>,
) -> Result<SolveResult> {
    Solver::default().solve(matrix, vehicle_count, demands, capacities)
}

fn solve_with(problem: &Problem, config: &SolverConfig) -> Result<SolveResult> {
    config.validate()?;

    let initial = cheapest_insertion(problem)?;
    let distances = problem.distances();
    let initial_distance = initial.total_distance(distances);

    let improved = optimize(problem, &initial, config.max_passes);
    ensure_valid(problem, &improved)?;

    let result = assemble(problem, &improved, config);
    log::info!(
        "solved {} stops with {} vehicles: distance {:.4} -> {:.4}",
        problem.num_stops(),
        problem.vehicles().len(),
        initial_distance,
        result.total_distance
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_solve_request_uses_override() {
        let request = SolveRequest::new(
            vec![vec![0.0, 4.0], vec![4.0, 0.0]],
            1,
        )
        .with_config(SolverConfig::new().with_minutes_per_distance(2.0));
        let result = Solver::default().solve_request(&request).expect("solvable");
        assert_eq!(result.total_distance, 8.0);
        assert_eq!(result.total_duration, 16.0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let solver = Solver::new(SolverConfig::new().with_cost_per_distance(-1.0));
        let err = solver
            .solve(&[vec![0.0]], 1, None, None)
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_request_json_round_trip_fields() {
        let request = SolveRequest::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]], 2)
            .with_demands(vec![3.0])
            .with_capacities(vec![5.0, 5.0]);
        let json = serde_json::to_string(&request).expect("serializable");
        let back: SolveRequest = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, request);
    }

    #[test]
    fn test_solver_is_stateless() {
        let solver = Solver::default();
        let matrix = vec![
            vec![0.0, 3.0, 4.0],
            vec![3.0, 0.0, 5.0],
            vec![4.0, 5.0, 0.0],
        ];
        let first = solver.solve(&matrix, 2, None, None).expect("solvable");
        let _ = solver.solve(&[vec![0.0]], 1, None, None).expect("solvable");
        let again = solver.solve(&matrix, 2, None, None).expect("solvable");
        assert_eq!(first, again);
    }
}
