//! Client error type.
//!
//! ERROR HANDLING
//! ==============
//! Handlers never surface these to callers; they log them and turn them into
//! user alerts. The variants exist so the upload and texture flows can tell
//! an HTTP failure from a transport or decoding failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("dom error: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
impl ClientError {
    /// Wrap a thrown JS value from a `web-sys` call.
    pub(crate) fn from_js(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// `true` for HTTP 2xx statuses, mirroring `Response.ok` in the browser.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}
