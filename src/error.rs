// Error type shared by the starfield setup code

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum StarfieldError {
    // No global `window`, e.g. when running inside a worker
    #[error("no global window exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id '{0}' on the page")]
    CanvasNotFound(String),
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d rendering context")]
    ContextUnavailable,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    // Exception thrown back from a browser API
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for StarfieldError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => StarfieldError::Js(message),
            None => StarfieldError::Js(format!("{:?}", value)),
        }
    }
}

impl From<StarfieldError> for JsValue {
    fn from(err: StarfieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
