//! Constructive heuristics for building initial solutions.
//!
//! - [`cheapest_insertion`] — Depot-distance ordered greedy cheapest insertion over a fixed fleet, O(n² + n·m)

mod cheapest_insertion;

pub use cheapest_insertion::cheapest_insertion;
