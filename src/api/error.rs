//! Error type for the WASM binding layer
//!
//! The engine itself has no error surface; only environment acquisition
//! (window, document, matchMedia) can fail, and only at initialization.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error)]
pub enum AdaptError {
    /// No `window` object (not running in a browsing context).
    #[error("no window in this environment")]
    NoWindow,

    /// The window has no document.
    #[error("no document on window")]
    NoDocument,

    /// `matchMedia` rejected or returned nothing for a query.
    #[error("matchMedia failed for query: {0}")]
    MatchMedia(String),

    /// A report was requested before `use_dynamic_adapt` ran.
    #[error("dynamic adapt is not initialized")]
    NotInitialized,
}

impl From<AdaptError> for JsValue {
    fn from(error: AdaptError) -> JsValue {
        JsValue::from_str(&error.to_string())
    }
}
