//! Error taxonomy for lightbox initialization.
//!
//! Every variant is a configuration fault: it is raised once while binding
//! and means no listener was registered. Faults during a single activation
//! are logged and recovered inside [`crate::lightbox`] instead.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// Error returned while resolving markup or configuration.
#[derive(Debug, thiserror::Error)]
pub enum LightboxError {
    /// There is no global `window` (not running in a browser main thread).
    #[error("no global window available")]
    NoWindow,
    /// The window has no `document`.
    #[error("window has no document")]
    NoDocument,
    /// A required singleton element matched nothing.
    #[error("missing {role} element (selector `{selector}`)")]
    MissingElement { role: &'static str, selector: String },
    /// A required singleton element exists but has the wrong type.
    #[error("{role} element (selector `{selector}`) is not an {expected}")]
    WrongElementType {
        role: &'static str,
        selector: String,
        expected: &'static str,
    },
    /// The browser rejected a selector.
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    /// The JSON configuration could not be parsed.
    #[error("invalid lightbox config: {0}")]
    Config(#[from] serde_json::Error),
    /// The configured `shown_display` would leave the overlay hidden.
    #[error("shown_display `{0}` would keep the overlay hidden")]
    ShownDisplay(String),
    /// The configured log level is not one of `error`..`trace`.
    #[error("unknown log level: {0}")]
    LogLevel(String),
    /// A DOM call failed outside of selector resolution.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<LightboxError> for JsValue {
    fn from(err: LightboxError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort human readable text for a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
