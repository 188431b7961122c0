//! # fleetroute
//!
//! Deterministic route optimization for a fixed fleet serving delivery stops
//! from a single depot, given a caller-supplied travel-cost matrix.
//!
//! ## Pipeline
//!
//! Each solve is a pure function of its inputs:
//!
//! 1. [`models::Problem`] — validates the matrix, demands, and fleet
//! 2. [`constructive::cheapest_insertion`] — greedy feasible initial routes
//! 3. [`local_search::optimize`] — 2-opt and relocate until a fixed point
//! 4. [`evaluation::ensure_valid`] — re-checks every invariant
//! 5. [`result::assemble`] — node sequences, distances, durations, load bands
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Problem, Vehicle, Route, Solution)
//! - [`distance`] — Validated distance matrix with an unreachable sentinel
//! - [`constructive`] — Cheapest-insertion construction
//! - [`local_search`] — Local search operators (2-opt, Relocate)
//! - [`evaluation`] — Solution validation
//! - [`result`] — Caller-facing route summaries
//! - [`config`] — Pass budget, duration/cost factors, load thresholds
//! - [`solver`] — Entry points
//! - [`batch`] — Many independent solves
//!
//! ## Example
//!
//! ```
//! let matrix = vec![
//!     vec![0.0, 2.0, 9.0],
//!     vec![2.0, 0.0, 1.0],
//!     vec![9.0, 1.0, 0.0],
//! ];
//! let result = fleetroute::solve(&matrix, 1, None, None).unwrap();
//! assert_eq!(result.routes[0].node_indices, vec![0, 1, 2, 0]);
//! assert_eq!(result.total_distance, 12.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: run [`batch::solve_batch`] on the rayon thread pool
//! - `ffi`: JSON-based C ABI
//! - `wasm`: `wasm-bindgen` bindings

pub mod batch;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod result;
pub mod solver;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{LoadBands, SolverConfig};
pub use error::{EngineError, Result};
pub use result::{LoadBand, RouteSummary, SolveResult};
pub use solver::{solve, SolveRequest, Solver};
