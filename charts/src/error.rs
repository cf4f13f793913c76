use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("chart target not found: {0}")]
    TargetNotFound(String),

    #[error("chart target is not a canvas: {0}")]
    NotACanvas(String),

    #[error("2d context unavailable for: {0}")]
    ContextUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("draw failed: {0}")]
    Draw(String),
}

impl From<wasm_bindgen::JsValue> for ChartError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Draw(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
