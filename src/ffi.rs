//! C FFI API functions.
//!
//! Requests and responses are JSON strings. The request body is a
//! [`SolveRequest`]; the response is a [`SolveResponse`].

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::{Deserialize, Serialize};

use crate::result::SolveResult;
use crate::solver::{SolveRequest, Solver};

/// API version.
pub const API_VERSION: &str = "1.0";

/// Error codes.
pub const FLEETROUTE_OK: i32 = 0;
pub const FLEETROUTE_ERR_NULL_PTR: i32 = -1;
pub const FLEETROUTE_ERR_INVALID_JSON: i32 = -2;
pub const FLEETROUTE_ERR_SOLVE_FAILED: i32 = -3;
pub const FLEETROUTE_ERR_UNKNOWN: i32 = -99;

/// JSON response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    /// API version.
    pub version: String,
    /// Whether the solve succeeded.
    pub success: bool,
    /// Error kind name, e.g. `"InfeasibleDemand"`.
    pub error_kind: Option<String>,
    /// Human-readable error message.
    pub error: Option<String>,
    /// The result, when successful.
    pub result: Option<SolveResult>,
}

impl SolveResponse {
    fn failure(kind: &str, message: String) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error_kind: Some(kind.to_string()),
            error: Some(message),
            result: None,
        }
    }
}

/// Solves a routing request from JSON input.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `fleetroute_free_string`
#[no_mangle]
pub unsafe extern "C" fn fleetroute_solve(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    if request_json.is_null() || result_ptr.is_null() {
        return FLEETROUTE_ERR_NULL_PTR;
    }

    let json_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return FLEETROUTE_ERR_INVALID_JSON,
    };

    let response = solve_json(json_str);
    let response_json = match serde_json::to_string(&response) {
        Ok(s) => s,
        Err(_) => return FLEETROUTE_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            if response.success {
                FLEETROUTE_OK
            } else {
                FLEETROUTE_ERR_SOLVE_FAILED
            }
        }
        Err(_) => FLEETROUTE_ERR_UNKNOWN,
    }
}

/// Frees a string allocated by this library.
///
/// # Safety
/// - `ptr` must have been returned by `fleetroute_solve`
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn fleetroute_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Returns the crate version.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn fleetroute_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

/// Parses a JSON request, solves it, and wraps the outcome.
pub fn solve_json(json_str: &str) -> SolveResponse {
    let request: SolveRequest = match serde_json::from_str(json_str) {
        Ok(r) => r,
        Err(e) => return SolveResponse::failure("InvalidJson", format!("Invalid JSON: {}", e)),
    };

    match Solver::default().solve_request(&request) {
        Ok(result) => SolveResponse {
            version: API_VERSION.to_string(),
            success: true,
            error_kind: None,
            error: None,
            result: Some(result),
        },
        Err(e) => SolveResponse::failure(e.kind(), e.to_string()),
    }
}
