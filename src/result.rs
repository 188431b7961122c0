//! Caller-facing solve results.

use serde::{Deserialize, Serialize};

use crate::config::{LoadBands, SolverConfig};
use crate::models::{Problem, Route, Solution, DEPOT};

/// Qualitative load classification of a route by stop count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBand {
    /// No stops assigned.
    Unused,
    /// At most `light_max` stops.
    Light,
    /// At most `medium_max` stops.
    Medium,
    /// More than `medium_max` stops.
    Heavy,
}

impl LoadBand {
    /// Classifies a stop count against the given thresholds.
    ///
    /// ```
    /// use fleetroute::config::LoadBands;
    /// use fleetroute::result::LoadBand;
    ///
    /// let bands = LoadBands::default();
    /// assert_eq!(LoadBand::classify(0, &bands), LoadBand::Unused);
    /// assert_eq!(LoadBand::classify(2, &bands), LoadBand::Light);
    /// assert_eq!(LoadBand::classify(4, &bands), LoadBand::Medium);
    /// assert_eq!(LoadBand::classify(5, &bands), LoadBand::Heavy);
    /// ```
    pub fn classify(stop_count: usize, bands: &LoadBands) -> Self {
        match stop_count {
            0 => Self::Unused,
            n if n <= bands.light_max => Self::Light,
            n if n <= bands.medium_max => Self::Medium,
            _ => Self::Heavy,
        }
    }
}

/// One vehicle's optimized route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Vehicle that drives this route.
    pub vehicle_id: usize,

    /// Visiting order, starting and ending at the depot. `[0, 0]` when empty.
    pub node_indices: Vec<usize>,

    /// Sum of consecutive edge costs along `node_indices`.
    pub total_distance: f64,

    /// Cost of the final leg back to the depot.
    pub return_distance: f64,

    /// Accumulated demand of the stops on this route.
    pub load_used: f64,

    /// Number of stops (depot excluded).
    pub stop_count: usize,

    /// `total_distance` converted with the configured duration factor.
    pub duration: f64,

    /// `total_distance` times the configured cost per distance.
    pub cost: f64,

    /// Qualitative load classification.
    pub load_band: LoadBand,

    /// Whether any leg uses the unreachable-pair sentinel cost.
    pub has_unreachable_leg: bool,
}

impl RouteSummary {
    /// Returns `true` if the vehicle has no stops.
    pub fn is_empty(&self) -> bool {
        self.stop_count == 0
    }

    /// The visiting order without the trailing return to the depot.
    pub fn open_path(&self) -> &[usize] {
        &self.node_indices[..self.node_indices.len() - 1]
    }

    /// Distance of [`open_path`](Self::open_path), i.e. without the return leg.
    pub fn open_distance(&self) -> f64 {
        self.total_distance - self.return_distance
    }
}

/// The full result of a solve: one route per vehicle plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Routes in vehicle order.
    pub routes: Vec<RouteSummary>,

    /// Sum of per-route distances.
    pub total_distance: f64,

    /// Sum of per-route durations.
    pub total_duration: f64,

    /// Sum of per-route costs.
    pub total_cost: f64,
}

impl SolveResult {
    /// Number of vehicles that serve at least one stop.
    pub fn vehicles_used(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total number of stops served.
    pub fn stops_served(&self) -> usize {
        self.routes.iter().map(|r| r.stop_count).sum()
    }
}

/// Converts a validated solution into its caller-facing form.
///
/// Pure transformation: neither the problem nor the solution is modified.
pub fn assemble(problem: &Problem, solution: &Solution, config: &SolverConfig) -> SolveResult {
    let routes: Vec<RouteSummary> = solution
        .routes()
        .iter()
        .map(|route| summarize(problem, route, config))
        .collect();

    let total_distance = routes.iter().map(|r| r.total_distance).sum();
    let total_duration = routes.iter().map(|r| r.duration).sum();
    let total_cost = routes.iter().map(|r| r.cost).sum();

    SolveResult {
        routes,
        total_distance,
        total_duration,
        total_cost,
    }
}

fn summarize(problem: &Problem, route: &Route, config: &SolverConfig) -> RouteSummary {
    let distances = problem.distances();
    let node_indices = route.node_indices();
    let stop_count = route.len();

    let (total_distance, return_distance, has_unreachable_leg) = if route.is_empty() {
        (0.0, 0.0, false)
    } else {
        let last = route.stops()[stop_count - 1];
        let unreachable = node_indices
            .windows(2)
            .any(|w| distances.is_infeasible(w[0], w[1]));
        (
            distances.path_cost(&node_indices),
            distances.get(last, DEPOT),
            unreachable,
        )
    };

    if has_unreachable_leg {
        log::warn!(
            "route of vehicle {} uses an unreachable leg",
            route.vehicle_id()
        );
    }

    RouteSummary {
        vehicle_id: route.vehicle_id(),
        node_indices,
        total_distance,
        return_distance,
        load_used: route.stops().iter().map(|&s| problem.demand(s)).sum(),
        stop_count,
        duration: total_distance * config.minutes_per_distance,
        cost: total_distance * config.cost_per_distance,
        load_band: LoadBand::classify(stop_count, &config.load_bands),
        has_unreachable_leg,
    }
}
