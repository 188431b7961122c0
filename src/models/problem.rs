//! Validated routing problem.

use super::{Vehicle, DEPOT};
use crate::distance::DistanceMatrix;
use crate::error::{EngineError, Result};

/// An immutable, validated routing problem instance.
///
/// Node 0 is the depot and nodes `1..size` are stops. Demands are indexed by
/// node, with the depot's demand fixed at zero. Constructing a `Problem`
/// is the only place inputs are validated; every later stage trusts it.
///
/// # Examples
///
/// ```
/// use fleetroute::distance::DistanceMatrix;
/// use fleetroute::models::Problem;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 1.0],
///     vec![9.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let problem = Problem::new(dm, Some(vec![3.0, 4.0]), 2, Some(vec![5.0, 5.0])).unwrap();
/// assert_eq!(problem.num_stops(), 2);
/// assert_eq!(problem.demand(2), 4.0);
/// assert_eq!(problem.vehicles().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    distances: DistanceMatrix,
    demands: Vec<f64>,
    vehicles: Vec<Vehicle>,
}

impl Problem {
    /// Validates inputs and builds a problem.
    ///
    /// * `demands`: one per stop (`distances.size() - 1` values); `None` means all zero
    /// * `capacities`: one per vehicle; `None` means unbounded
    ///
    /// Fails with `DimensionMismatch` when the demand count disagrees with the
    /// matrix, and with `InvalidParameter` for a zero vehicle count, a
    /// capacity count different from `vehicle_count`, or a negative or NaN
    /// demand or capacity.
    pub fn new(
        distances: DistanceMatrix,
        demands: Option<Vec<f64>>,
        vehicle_count: usize,
        capacities: Option<Vec<f64>>,
    ) -> Result<Self> {
        let num_stops = distances.size() - 1;

        if vehicle_count < 1 {
            return Err(EngineError::InvalidParameter(
                "vehicle count must be at least 1".into(),
            ));
        }

        let stop_demands = demands.unwrap_or_else(|| vec![0.0; num_stops]);
        if stop_demands.len() != num_stops {
            return Err(EngineError::DimensionMismatch {
                what: "demands",
                expected: num_stops,
                actual: stop_demands.len(),
            });
        }
        if let Some((i, &d)) = stop_demands
            .iter()
            .enumerate()
            .find(|(_, d)| d.is_nan() || **d < 0.0 || d.is_infinite())
        {
            return Err(EngineError::InvalidParameter(format!(
                "demand of stop {} must be finite and non-negative, got {d}",
                i + 1
            )));
        }

        let vehicles = match capacities {
            None => (0..vehicle_count).map(Vehicle::new).collect(),
            Some(caps) => {
                if caps.len() != vehicle_count {
                    return Err(EngineError::InvalidParameter(format!(
                        "expected {vehicle_count} capacities, got {}",
                        caps.len()
                    )));
                }
                let mut vehicles = Vec::with_capacity(vehicle_count);
                for (id, cap) in caps.into_iter().enumerate() {
                    if cap.is_nan() || cap < 0.0 {
                        return Err(EngineError::InvalidParameter(format!(
                            "capacity of vehicle {id} must be non-negative, got {cap}"
                        )));
                    }
                    vehicles.push(Vehicle::new(id).with_capacity(cap));
                }
                vehicles
            }
        };

        let mut node_demands = Vec::with_capacity(num_stops + 1);
        node_demands.push(0.0);
        node_demands.extend(stop_demands);

        log::debug!(
            "problem: {} stops, {} vehicles, symmetric matrix: {}",
            num_stops,
            vehicle_count,
            distances.is_symmetric(1e-9)
        );

        Ok(Self {
            distances,
            demands: node_demands,
            vehicles,
        })
    }

    /// Convenience constructor from nested matrix rows.
    pub fn from_rows(
        rows: &[Vec<f64>],
        demands: Option<Vec<f64>>,
        vehicle_count: usize,
        capacities: Option<Vec<f64>>,
    ) -> Result<Self> {
        Self::new(
            DistanceMatrix::from_rows(rows)?,
            demands,
            vehicle_count,
            capacities,
        )
    }

    /// The travel-cost matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Travel cost from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Demand of `node` (zero for the depot).
    pub fn demand(&self, node: usize) -> f64 {
        self.demands[node]
    }

    /// The fleet, in vehicle-id order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of nodes including the depot.
    pub fn num_nodes(&self) -> usize {
        self.distances.size()
    }

    /// Number of delivery stops (depot excluded).
    pub fn num_stops(&self) -> usize {
        self.distances.size() - 1
    }

    /// Node indices of all stops, ascending.
    pub fn stops(&self) -> impl Iterator<Item = usize> {
        (DEPOT + 1)..self.distances.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(n: usize) -> DistanceMatrix {
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
            .collect();
        DistanceMatrix::from_rows(&rows).expect("valid")
    }

    #[test]
    fn test_defaults_zero_demand_unbounded() {
        let p = Problem::new(matrix(4), None, 2, None).expect("valid");
        assert_eq!(p.num_stops(), 3);
        assert_eq!(p.num_nodes(), 4);
        assert!(p.stops().all(|s| p.demand(s) == 0.0));
        assert_eq!(p.demand(0), 0.0);
        assert!(p.vehicles().iter().all(|v| v.capacity().is_none()));
        assert_eq!(p.stops().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_demand_count_mismatch() {
        let err = Problem::new(matrix(4), Some(vec![1.0, 2.0]), 1, None).unwrap_err();
        assert_eq!(
            err,
            EngineError::DimensionMismatch {
                what: "demands",
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_zero_vehicles() {
        let err = Problem::new(matrix(3), None, 0, None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_capacity_count_mismatch() {
        let err = Problem::new(matrix(3), None, 2, Some(vec![5.0])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_negative_capacity() {
        let err = Problem::new(matrix(3), None, 2, Some(vec![5.0, -1.0])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_negative_demand() {
        let err = Problem::new(matrix(3), Some(vec![1.0, -2.0]), 1, None).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_depot_only() {
        let p = Problem::new(matrix(1), None, 3, None).expect("valid");
        assert_eq!(p.num_stops(), 0);
        assert_eq!(p.stops().count(), 0);
    }

    #[test]
    fn test_from_rows_propagates_matrix_errors() {
        let err = Problem::from_rows(&[vec![0.0, 1.0]], None, 1, None).unwrap_err();
        assert!(matches!(err, EngineError::DimensionMismatch { .. }));
    }
}
