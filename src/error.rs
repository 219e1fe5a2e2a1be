use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no window or localStorage available")]
    Unavailable,
    #[error("localStorage call failed: {0}")]
    Js(String),
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for StorageError {
    fn from(v: wasm_bindgen::JsValue) -> Self {
        StorageError::Js(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}
