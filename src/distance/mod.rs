//! Distance matrices.
//!
//! Provides a dense, validated travel-cost matrix for routing problems.

mod matrix;

pub use matrix::{route_distance, DistanceMatrix};
