//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Stop-count thresholds for the qualitative load classification.
///
/// A route with `stops <= light_max` is light, `stops <= medium_max` is
/// medium, anything above is heavy. Routes with no stops are unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBands {
    /// Largest stop count still classified as light.
    pub light_max: usize,
    /// Largest stop count still classified as medium.
    pub medium_max: usize,
}

impl Default for LoadBands {
    fn default() -> Self {
        Self {
            light_max: 2,
            medium_max: 4,
        }
    }
}

/// Configuration for a [`Solver`](crate::solver::Solver).
///
/// # Examples
///
/// ```
/// use fleetroute::config::SolverConfig;
///
/// let config = SolverConfig::new()
///     .with_max_passes(50)
///     .with_minutes_per_distance(60.0 / 30.0)
///     .with_cost_per_distance(0.25);
/// assert_eq!(config.max_passes, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Maximum number of optimizer passes.
    pub max_passes: usize,

    /// Duration per unit of distance. The default of 1.5 corresponds to
    /// minutes per kilometre at 40 km/h.
    pub minutes_per_distance: f64,

    /// Operating cost per unit of distance (fuel estimate).
    pub cost_per_distance: f64,

    /// Load classification thresholds.
    pub load_bands: LoadBands,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_passes: 200,
            minutes_per_distance: 1.5,
            cost_per_distance: 0.0,
            load_bands: LoadBands::default(),
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the optimizer pass budget.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    /// Sets the duration conversion factor.
    pub fn with_minutes_per_distance(mut self, factor: f64) -> Self {
        self.minutes_per_distance = factor;
        self
    }

    /// Derives the duration factor from an average speed in distance units per hour.
    pub fn with_average_speed(mut self, speed_per_hour: f64) -> Self {
        self.minutes_per_distance = 60.0 / speed_per_hour;
        self
    }

    /// Sets the cost per unit of distance.
    pub fn with_cost_per_distance(mut self, cost: f64) -> Self {
        self.cost_per_distance = cost;
        self
    }

    /// Sets the load classification thresholds.
    pub fn with_load_bands(mut self, bands: LoadBands) -> Self {
        self.load_bands = bands;
        self
    }

    /// Checks that every factor is finite and non-negative and that the
    /// load thresholds are ordered.
    pub fn validate(&self) -> Result<()> {
        if !self.minutes_per_distance.is_finite() || self.minutes_per_distance < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "minutes_per_distance must be finite and non-negative, got {}",
                self.minutes_per_distance
            )));
        }
        if !self.cost_per_distance.is_finite() || self.cost_per_distance < 0.0 {
            return Err(EngineError::InvalidParameter(format!(
                "cost_per_distance must be finite and non-negative, got {}",
                self.cost_per_distance
            )));
        }
        if self.load_bands.light_max > self.load_bands.medium_max {
            return Err(EngineError::InvalidParameter(format!(
                "load band thresholds out of order: light_max {} > medium_max {}",
                self.load_bands.light_max, self.load_bands.medium_max
            )));
        }
        Ok(())
    }
}
