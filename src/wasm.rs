//! WebAssembly bindings.
//!
//! The request object mirrors [`SolveRequest`]; the returned value mirrors
//! [`SolveResult`](crate::result::SolveResult).

use wasm_bindgen::prelude::*;

use crate::solver::{SolveRequest, Solver};

/// Solves a routing request passed as a plain JS object.
///
/// Throws a JS `Error` whose `name` is the engine error kind.
#[wasm_bindgen]
pub fn solve(request: JsValue) -> Result<JsValue, JsValue> {
    let request: SolveRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| js_error("InvalidRequest", &e.to_string()))?;

    let result = Solver::default()
        .solve_request(&request)
        .map_err(|e| js_error(e.kind(), &e.to_string()))?;

    serde_wasm_bindgen::to_value(&result).map_err(|e| js_error("SerializationError", &e.to_string()))
}

/// Crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn js_error(kind: &str, message: &str) -> JsValue {
    let error = js_sys::Error::new(message);
    error.set_name(kind);
    error.into()
}
