use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(gloo::net::Error),
    #[error("HTTP {status} loading {url}")]
    Status { url: String, status: u16 },
    #[error("Catalog body was not valid JSON: {0}")]
    Decode(gloo::net::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        MountError::Dom(crate::dom::js_error_message(&value))
    }
}
