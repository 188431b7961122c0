//! Domain model types for the routing engine.
//!
//! Provides the validated problem instance, vehicles with optional
//! capacities, routes as ordered stop sequences, and the solution that
//! ties one route to each vehicle.

mod problem;
mod route;
mod solution;
mod vehicle;

pub use problem::Problem;
pub use route::{Route, DEPOT};
pub use solution::{Solution, Violation, ViolationType};
pub use vehicle::Vehicle;
