//! WASM bindings for tomlmerge-core.
//!
//! Exposes `merge` and `check` as `#[wasm_bindgen]` functions that can be
//! called from JavaScript/TypeScript build tooling.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p tomlmerge-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/tomlmerge-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/tomlmerge_wasm.wasm
//! ```

use tomlmerge_core::MergeOptions;
use wasm_bindgen::prelude::*;

/// Merge TOML documents (later ones win) and return the merged TOML.
///
/// Throws a JS error if no documents are given or one of them is not valid
/// TOML; the message names the 0-based index of the offending document.
#[wasm_bindgen]
pub fn merge(configs: Vec<String>, numbers_as_float: bool) -> std::result::Result<String, JsValue> {
    let options = MergeOptions { numbers_as_float };
    tomlmerge_core::merge(&configs, &options).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check that a string is valid TOML.
///
/// Throws a JS error describing the first syntax error otherwise.
#[wasm_bindgen]
pub fn check(toml: &str) -> std::result::Result<(), JsValue> {
    tomlmerge_core::parse(toml)
        .map(|_| ())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
