//! Working route type.

use crate::distance::{route_distance, DistanceMatrix};

/// Index of the depot node.
pub const DEPOT: usize = 0;

/// An ordered sequence of stops served by a single vehicle.
///
/// The route implicitly starts and ends at the depot; only the stops are
/// stored. The accumulated demand is kept alongside so capacity checks
/// stay O(1) while the optimizer moves stops around.
///
/// # Examples
///
/// ```
/// use fleetroute::models::Route;
///
/// let mut route = Route::new(0);
/// route.insert(0, 2, 5.0);
/// route.insert(0, 1, 3.0);
/// assert_eq!(route.stops(), &[1, 2]);
/// assert_eq!(route.load(), 8.0);
/// assert_eq!(route.node_indices(), vec![0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<usize>,
    load: f64,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            stops: Vec::new(),
            load: 0.0,
        }
    }

    /// Inserts `stop` with the given demand before position `pos`.
    pub fn insert(&mut self, pos: usize, stop: usize, demand: f64) {
        self.stops.insert(pos, stop);
        self.load += demand;
    }

    /// Removes and returns the stop at `pos`, releasing its demand.
    pub fn remove(&mut self, pos: usize, demand: f64) -> usize {
        self.load -= demand;
        self.stops.remove(pos)
    }

    /// Reverses the stops in positions `i..=j`.
    pub fn reverse(&mut self, i: usize, j: usize) {
        self.stops[i..=j].reverse();
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the stops in visit order, depot excluded.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops (depot excluded).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if this route serves no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Accumulated demand of all stops on this route.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Total travel cost, depot legs included.
    pub fn distance(&self, distances: &DistanceMatrix) -> f64 {
        route_distance(&self.stops, DEPOT, distances)
    }

    /// Cost change of inserting `stop` before position `pos`.
    ///
    /// Old: prev → next. New: prev → stop → next.
    pub fn insertion_cost(&self, pos: usize, stop: usize, distances: &DistanceMatrix) -> f64 {
        let prev = if pos == 0 { DEPOT } else { self.stops[pos - 1] };
        let next = if pos == self.stops.len() {
            DEPOT
        } else {
            self.stops[pos]
        };
        if prev == DEPOT && next == DEPOT {
            // empty route: no depot self-loop to replace
            return distances.get(DEPOT, stop) + distances.get(stop, DEPOT);
        }
        distances.get(prev, stop) + distances.get(stop, next) - distances.get(prev, next)
    }

    /// Cost change of removing the stop at `pos`.
    ///
    /// Old: prev → stop → next. New: prev → next.
    pub fn removal_cost(&self, pos: usize, distances: &DistanceMatrix) -> f64 {
        let stop = self.stops[pos];
        let prev = if pos == 0 { DEPOT } else { self.stops[pos - 1] };
        let next = if pos + 1 == self.stops.len() {
            DEPOT
        } else {
            self.stops[pos + 1]
        };
        let bridge = if prev == DEPOT && next == DEPOT {
            0.0
        } else {
            distances.get(prev, next)
        };
        bridge - distances.get(prev, stop) - distances.get(stop, next)
    }

    /// Cheapest insertion position for `stop`, latest position on ties.
    ///
    /// Returns `(position, cost_increase)`.
    pub fn cheapest_insertion(&self, stop: usize, distances: &DistanceMatrix) -> (usize, f64) {
        let mut best = (0, self.insertion_cost(0, stop, distances));
        for pos in 1..=self.stops.len() {
            let delta = self.insertion_cost(pos, stop, distances);
            if delta <= best.1 {
                best = (pos, delta);
            }
        }
        best
    }

    /// The depot-closed node sequence `[0, stops.., 0]`.
    ///
    /// An empty route yields `[0, 0]`.
    pub fn node_indices(&self) -> Vec<usize> {
        let mut nodes = Vec::with_capacity(self.stops.len() + 2);
        nodes.push(DEPOT);
        nodes.extend_from_slice(&self.stops);
        nodes.push(DEPOT);
        nodes
    }
}
