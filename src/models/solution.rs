//! Solution and violation types.

use std::fmt;

use super::Route;
use crate::distance::DistanceMatrix;

/// A structural or feasibility defect found in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A stop is not served by any route.
    MissingStop {
        /// Node index of the stop.
        stop: usize,
    },
    /// A stop is served more than once across the solution.
    DuplicateStop {
        /// Node index of the stop.
        stop: usize,
        /// How many times it appears.
        occurrences: usize,
    },
    /// A route visits the depot mid-route or a node outside the matrix.
    InvalidNode {
        /// Route index in the solution.
        route_index: usize,
        /// Offending node index.
        node: usize,
    },
    /// A route does not start and end at the depot.
    OpenRoute {
        /// Route index in the solution.
        route_index: usize,
    },
    /// Accumulated demand exceeds the vehicle's capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load carried by the route.
        load: f64,
        /// Vehicle capacity.
        capacity: f64,
    },
    /// The number of routes differs from the fleet size.
    FleetSizeMismatch {
        /// Vehicles in the problem.
        expected: usize,
        /// Routes in the solution.
        actual: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationType::MissingStop { stop } => write!(f, "stop {stop} is not served"),
            ViolationType::DuplicateStop { stop, occurrences } => {
                write!(f, "stop {stop} is served {occurrences} times")
            }
            ViolationType::InvalidNode { route_index, node } => {
                write!(f, "route {route_index} visits invalid node {node}")
            }
            ViolationType::OpenRoute { route_index } => {
                write!(f, "route {route_index} does not start and end at the depot")
            }
            ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            } => write!(
                f,
                "route {route_index} carries {load} over capacity {capacity}"
            ),
            ViolationType::FleetSizeMismatch { expected, actual } => {
                write!(f, "{actual} routes for {expected} vehicles")
            }
        }
    }
}

/// The set of routes for one solve, one per vehicle, in vehicle order.
///
/// # Examples
///
/// ```
/// use fleetroute::models::{Route, Solution};
///
/// let sol = Solution::with_routes(vec![Route::new(0), Route::new(1)]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution from routes.
    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns a mutable reference to the routes.
    pub fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    /// Number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of stops served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Total travel cost across all routes.
    pub fn total_distance(&self, distances: &DistanceMatrix) -> f64 {
        self.routes.iter().map(|r| r.distance(distances)).sum()
    }
}
