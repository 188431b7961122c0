//! Vehicle type with an optional capacity.

/// Absolute slack allowed when comparing accumulated load to capacity.
const LOAD_TOLERANCE: f64 = 1e-9;

/// A vehicle that owns exactly one route per solve.
///
/// # Examples
///
/// ```
/// use fleetroute::models::Vehicle;
///
/// let v = Vehicle::new(0).with_capacity(10.0);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), Some(10.0));
/// assert!(v.can_carry(10.0));
/// assert!(!v.can_carry(10.5));
///
/// let unbounded = Vehicle::new(1);
/// assert!(unbounded.can_carry(1e6));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: usize,
    capacity: Option<f64>,
}

impl Vehicle {
    /// Creates a vehicle with unbounded capacity.
    pub fn new(id: usize) -> Self {
        Self { id, capacity: None }
    }

    /// Sets the maximum cumulative demand this vehicle may carry.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Vehicle ID (its position in the fleet).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity, `None` when unbounded.
    pub fn capacity(&self) -> Option<f64> {
        self.capacity
    }

    /// Returns `true` if a route carrying `load` stays within capacity.
    pub fn can_carry(&self, load: f64) -> bool {
        self.capacity
            .is_none_or(|capacity| load <= capacity + LOAD_TOLERANCE)
    }

    /// Capacity left after carrying `load`. Infinite when unbounded.
    pub fn remaining(&self, load: f64) -> f64 {
        self.capacity.map_or(f64::INFINITY, |capacity| capacity - load)
    }
}
