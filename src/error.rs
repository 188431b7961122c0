//! Engine error taxonomy.

use thiserror::Error;

use crate::models::Violation;

/// Errors returned by the routing engine.
///
/// Every failure is fatal to the solve call: the engine never returns a
/// partially computed solution alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An input's size disagrees with the number of locations.
    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which input was malformed.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A scalar parameter is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No vehicle has spare capacity for the given stop.
    #[error("no vehicle has spare capacity for stop {stop} (demand {demand})")]
    InfeasibleDemand {
        /// Node index of the stop that could not be placed.
        stop: usize,
        /// Demand of that stop.
        demand: f64,
    },

    /// The validator rejected an optimized solution. Indicates an engine bug.
    #[error("internal invariant violated: {}", describe(.violations))]
    InternalInvariantViolation {
        /// Every violation found.
        violations: Vec<Violation>,
    },
}

impl EngineError {
    /// Stable name of the error kind, used by the JSON boundaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => "DimensionMismatch",
            Self::InvalidParameter(_) => "InvalidParameter",
            Self::InfeasibleDemand { .. } => "InfeasibleDemand",
            Self::InternalInvariantViolation { .. } => "InternalInvariantViolation",
        }
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
