//! Error types for mounting and submitting.

use thiserror::Error;

/// Failures while binding the widget to the host page.
#[derive(Debug, Error)]
pub enum ChatBoxError {
    /// No global `window` object. The code is not running in a page.
    #[error("browser window is not available")]
    WindowUnavailable,

    /// The window has no document attached.
    #[error("browser document is not available")]
    DocumentUnavailable,

    /// A required element is missing from the host template.
    #[error("required element not found: {selector}")]
    ElementMissing { selector: String },

    /// An element resolved but is not the kind of node expected there.
    #[error("expected {expected} element at {selector}")]
    ElementType {
        selector: String,
        expected: &'static str,
    },

    /// A DOM call failed. Carries the browser's own description.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl ChatBoxError {
    pub(crate) fn from_js(err: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{err:?}"))
    }
}

/// Failures while exchanging one message with the chat endpoint.
///
/// Every variant renders as the same fallback bubble; the distinction
/// only matters for console diagnostics.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request could not be built or sent, or its body not decoded.
    #[error("chat request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The endpoint answered with a non-success status code.
    #[error("chat endpoint returned HTTP {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_error_names_selector() {
        let err = ChatBoxError::ElementMissing {
            selector: "#chat-form".to_owned(),
        };
        assert_eq!(err.to_string(), "required element not found: #chat-form");

        let err = ChatBoxError::ElementType {
            selector: "#user-input".to_owned(),
            expected: "input",
        };
        assert_eq!(err.to_string(), "expected input element at #user-input");
    }

    #[test]
    fn test_send_error_reports_status() {
        let err = SendError::Status(500);
        assert_eq!(err.to_string(), "chat endpoint returned HTTP 500");
    }
}
