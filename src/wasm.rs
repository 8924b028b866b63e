use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::api::find_anagrams;
use crate::log::init_logger;

#[derive(Serialize)]
struct WasmSearchResult {
    combinations: Vec<Vec<String>>,
    count: usize,
}

fn words_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Words must be an array of strings: {e}")))
}

/// Install the browser console logger.
#[wasm_bindgen]
pub fn init_logging(debug_enabled: bool) {
    init_logger(debug_enabled);
}

/// WebAssembly entry point: every combination of `words` spelling `phrase`.
#[wasm_bindgen]
pub fn solve_phrase(words: JsValue, phrase: &str, max_words: i32) -> Result<JsValue, JsValue> {
    let words_vec = words_from_js(words)?;
    let combinations = find_anagrams(&words_vec, phrase, max_words)
        .map_err(|e| JsValue::from_str(&format!("{e} [{}]", e.code())))?;
    let result = WasmSearchResult {
        count: combinations.len(),
        combinations,
    };
    to_value(&result).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}
