use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    Storage(String),
    Dom(String),
    Config(String),
}

impl Display for SiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            SiteError::Dom(msg) => write!(f, "DOM Error: {}", msg),
            SiteError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<serde_json::Error> for SiteError {
    fn from(error: serde_json::Error) -> Self {
        SiteError::Config(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
