//! Dense distance matrix.

use crate::error::{EngineError, Result};

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// Index 0 is the depot. Entries are non-negative and may be asymmetric.
/// Unreachable pairs carry [`DistanceMatrix::INFEASIBLE`].
///
/// # Examples
///
/// ```
/// use fleetroute::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 1.0],
///     vec![9.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 2), 9.0);
/// assert_eq!(dm.path_cost(&[0, 1, 2, 0]), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Cost recorded for a pair with no route between them.
    ///
    /// Inputs of `+inf`, or any value at or above this one, are stored as
    /// this sentinel so cost arithmetic stays finite.
    pub const INFEASIBLE: f64 = 1.0e9;

    /// Creates a matrix from nested rows.
    ///
    /// Fails with `DimensionMismatch` if the rows are empty or not square,
    /// and with `InvalidParameter` on a negative or NaN entry or a non-zero
    /// diagonal.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::DimensionMismatch {
                what: "distance matrix rows",
                expected: 1,
                actual: 0,
            });
        }
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(EngineError::DimensionMismatch {
                    what: "distance matrix row",
                    expected: size,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a matrix from an explicit row-major n×n buffer.
    pub fn from_data(size: usize, mut data: Vec<f64>) -> Result<Self> {
        if size == 0 || data.len() != size * size {
            return Err(EngineError::DimensionMismatch {
                what: "distance matrix data",
                expected: size * size,
                actual: data.len(),
            });
        }
        for (k, value) in data.iter_mut().enumerate() {
            let (i, j) = (k / size, k % size);
            if value.is_nan() || *value < 0.0 {
                return Err(EngineError::InvalidParameter(format!(
                    "distance ({i}, {j}) must be non-negative, got {value}"
                )));
            }
            if i == j && *value != 0.0 {
                return Err(EngineError::InvalidParameter(format!(
                    "diagonal distance ({i}, {i}) must be zero, got {value}"
                )));
            }
            if *value >= Self::INFEASIBLE {
                *value = Self::INFEASIBLE;
            }
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix, depot included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the pair has no usable connection.
    pub fn is_infeasible(&self, from: usize, to: usize) -> bool {
        self.get(from, to) >= Self::INFEASIBLE
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of consecutive edge costs along `path`.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Returns `candidates` ordered by ascending cost from `from`, ties broken
    /// by ascending index.
    pub fn sorted_by_distance_from(&self, from: usize, candidates: &[usize]) -> Vec<usize> {
        let mut sorted = candidates.to_vec();
        sorted.sort_by(|&a, &b| {
            self.get(from, a)
                .total_cmp(&self.get(from, b))
                .then(a.cmp(&b))
        });
        sorted
    }
}

/// Total cost of a route `depot → route[0] → ... → route[n-1] → depot`.
///
/// An empty route costs zero; the depot self-loop is never read.
pub fn route_distance(route: &[usize], depot: usize, distances: &DistanceMatrix) -> f64 {
    if route.is_empty() {
        return 0.0;
    }
    let mut dist = distances.get(depot, route[0]);
    for w in route.windows(2) {
        dist += distances.get(w[0], w[1]);
    }
    dist += distances.get(route[route.len() - 1], depot);
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 3.0],
            vec![8.0, 3.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = sample();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(2, 1), 3.0);
    }

    #[test]
    fn test_from_rows_not_square() {
        let err = DistanceMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_from_rows_empty() {
        assert!(matches!(
            DistanceMatrix::from_rows(&[]),
            Err(EngineError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_rejects_negative() {
        let err = DistanceMatrix::from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_rejects_nan() {
        let err = DistanceMatrix::from_data(2, vec![0.0, f64::NAN, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_rejects_nonzero_diagonal() {
        let err = DistanceMatrix::from_data(2, vec![3.0, 1.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn test_infinity_becomes_sentinel() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, f64::INFINITY, 4.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), DistanceMatrix::INFEASIBLE);
        assert!(dm.is_infeasible(0, 1));
        assert!(!dm.is_infeasible(1, 0));
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
    }

    #[test]
    fn test_asymmetric() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0, 42.0], vec![0.0, 0.0]]).expect("valid");
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
    }

    #[test]
    fn test_sorted_by_distance_ties_by_index() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 4.0, 2.0, 4.0],
            vec![4.0, 0.0, 1.0, 1.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![4.0, 1.0, 1.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(dm.sorted_by_distance_from(0, &[3, 1, 2]), vec![2, 1, 3]);
    }

    #[test]
    fn test_route_distance() {
        let dm = sample();
        assert_eq!(route_distance(&[1, 2], 0, &dm), 5.0 + 3.0 + 8.0);
        assert_eq!(route_distance(&[], 0, &dm), 0.0);
        assert_eq!(route_distance(&[2], 0, &dm), 16.0);
    }

    #[test]
    fn test_path_cost() {
        let dm = sample();
        assert_eq!(dm.path_cost(&[0, 2, 1, 0]), 16.0);
        assert_eq!(dm.path_cost(&[0]), 0.0);
    }
}
