use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn export_pdf(json: &str) -> Result<Vec<u8>, JsValue> {
    crate::export_pdf_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}
