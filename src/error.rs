use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the trail cannot be installed on a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrailError {
    #[error("no window")]
    NoWindow,

    #[error("no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("2d canvas context not supported")]
    NoContext,

    /// Viewport size could not be read as a number.
    #[error("viewport {0} is not a number")]
    Viewport(&'static str),

    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for TrailError {
    fn from(value: JsValue) -> Self {
        TrailError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<TrailError> for JsValue {
    fn from(err: TrailError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(TrailError::NoContext.to_string(), "2d canvas context not supported");
        assert_eq!(
            TrailError::Viewport("width").to_string(),
            "viewport width is not a number"
        );
        assert_eq!(
            TrailError::Dom("boom".into()).to_string(),
            "dom call failed: boom"
        );
    }
}
