//! WebAssembly entry point for the brute-force search.

use wasm_bindgen::prelude::*;

/// Brute-force search callable from JavaScript.
///
/// `target` is the target value as a string; `resistors` is an array whose
/// entries are numeric strings or numbers. Returns the two best matches
/// separated by `<br>`, or a descriptive error message.
#[wasm_bindgen]
pub fn rpickbf(target: &str, resistors: JsValue) -> Result<String, JsValue> {
    let entries: Vec<serde_json::Value> = serde_wasm_bindgen::from_value(resistors)
        .map_err(|_| JsValue::from_str("Invalid call (resistors list is not an array)"))?;

    let values: Vec<String> = entries
        .iter()
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();

    let result =
        super::search_str(target, &values).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(format!(
        "Best result with 2 resistors:{}<br>Best result with 3 resistors:{}",
        result.best2, result.best3
    ))
}
