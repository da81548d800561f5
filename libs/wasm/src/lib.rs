//! WASM-facing entry points for the dot pattern mesh pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Inputs arrive as JSON strings. Native tests interact with
//! the `*_internal` helpers to avoid depending on a JS host.
//!
//! ```
//! let grid = r#"{"width": 1, "height": 1, "data": [[true]]}"#;
//! let mesh = pattern_mesh_wasm::generate_mesh_internal(grid, "{}").unwrap();
//! assert_eq!(mesh.part_count(), 2);
//! ```

mod mesh_handle;

pub use mesh_handle::MeshHandle;

use pattern_mesh::{MeshError, ParameterSet, PatternGrid, PrintEstimate};
use thiserror::Error;
use tracing::debug;
use wasm_bindgen::prelude::*;

/// Errors surfaced across the JavaScript boundary.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Input JSON could not be decoded.
    #[error("Invalid {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Output could not be encoded for the caller.
    #[error("Failed to encode {what}: {source}")]
    Encode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Mesh generation or estimation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "pattern-mesh-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Generates the mesh for a pattern.
///
/// `grid_json` is `{"width", "height", "data"}`; `params_json` uses
/// camelCase field names and may omit any field to take its default.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when decoding, validation or generation fails.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = generate_mesh(JSON.stringify(grid), JSON.stringify({ optimizeMesh: true }));
/// // console.log(mesh.vertex_count, mesh.cube_count);
/// ```
#[wasm_bindgen]
pub fn generate_mesh(grid_json: &str, params_json: &str) -> Result<MeshHandle, JsValue> {
    generate_mesh_internal(grid_json, params_json).map_err(to_js_error)
}

/// Host-only helper returning Rust error types directly.
pub fn generate_mesh_internal(grid_json: &str, params_json: &str) -> Result<MeshHandle, BridgeError> {
    let (grid, params) = decode(grid_json, params_json)?;
    let mesh = pattern_mesh::assemble(&grid, &params)?;
    MeshHandle::from_composite(&mesh).map_err(|source| BridgeError::Encode {
        what: "mesh statistics",
        source,
    })
}

/// Estimates print time, material and cost, returned as a JSON string.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const estimate = JSON.parse(estimate_print_json(gridJson, paramsJson));
/// // console.log(estimate.printTimeMinutes);
/// ```
#[wasm_bindgen]
pub fn estimate_print_json(grid_json: &str, params_json: &str) -> Result<String, JsValue> {
    let estimate = estimate_print_internal(grid_json, params_json).map_err(to_js_error)?;
    serde_json::to_string(&estimate)
        .map_err(|source| BridgeError::Encode {
            what: "print estimate",
            source,
        })
        .map_err(to_js_error)
}

/// Host-only helper for [`estimate_print_json`].
pub fn estimate_print_internal(
    grid_json: &str,
    params_json: &str,
) -> Result<PrintEstimate, BridgeError> {
    let (grid, params) = decode(grid_json, params_json)?;
    Ok(pattern_mesh::estimate_print(&grid, &params)?)
}

fn decode(grid_json: &str, params_json: &str) -> Result<(PatternGrid, ParameterSet), BridgeError> {
    let grid = serde_json::from_str(grid_json).map_err(|source| BridgeError::Json {
        what: "grid",
        source,
    })?;
    let params = serde_json::from_str(params_json).map_err(|source| BridgeError::Json {
        what: "parameters",
        source,
    })?;
    debug!(?params, "decoded generation request");
    Ok((grid, params))
}

fn to_js_error(err: BridgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests;
