//! Solution validation.
//!
//! Re-checks completeness, depot closure, and capacity on a finished
//! solution before it leaves the engine.

mod validator;

pub use validator::{ensure_valid, validate};
