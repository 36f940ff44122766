//! Wire types for the chat endpoint.

use serde::Deserialize;

use crate::token::{CsrfToken, SessionToken};

/// Form field carrying the message text.
pub const MESSAGE_FIELD: &str = "message";
/// Form field carrying the session token.
pub const SESSION_FIELD: &str = "session_id";
/// Form field carrying the anti-forgery token.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Body of the chat POST: the three form fields the endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// User text, already validated and trimmed.
    pub message: String,
    /// Opaque session correlation token, forwarded unchanged.
    pub session_id: SessionToken,
    /// Anti-forgery token, forwarded unchanged.
    pub csrf_token: CsrfToken,
}

impl ChatRequest {
    /// Assemble a request from a draft and freshly read tokens.
    pub fn new(
        message: impl Into<String>,
        session_id: SessionToken,
        csrf_token: CsrfToken,
    ) -> Self {
        Self {
            message: message.into(),
            session_id,
            csrf_token,
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn to_form_encoded(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair(MESSAGE_FIELD, &self.message)
            .append_pair(SESSION_FIELD, self.session_id.as_str())
            .append_pair(CSRF_FIELD, self.csrf_token.as_str())
            .finish()
    }
}

/// JSON reply from the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Bot text to display.
    pub response: String,
    /// Echo of the submitted user text, if the server includes it.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(message: &str) -> ChatRequest {
        ChatRequest::new(
            message,
            SessionToken::new("abc123"),
            CsrfToken::new("tok"),
        )
    }

    #[test]
    fn test_request_encoding_field_order() {
        let body = request("hello").to_form_encoded();
        assert_eq!(body, "message=hello&session_id=abc123&csrfmiddlewaretoken=tok");
    }

    #[test]
    fn test_request_encoding_escapes_reserved_characters() {
        let body = request("a&b=c +d").to_form_encoded();
        assert_eq!(
            body,
            "message=a%26b%3Dc+%2Bd&session_id=abc123&csrfmiddlewaretoken=tok"
        );
    }

    #[test]
    fn test_request_encoding_escapes_non_ascii() {
        let body = request("café?").to_form_encoded();
        assert_eq!(
            body,
            "message=caf%C3%A9%3F&session_id=abc123&csrfmiddlewaretoken=tok"
        );
    }

    #[test]
    fn test_response_parsing_with_echo() {
        let json = r#"{"message":"hello","response":"Hi there!"}"#;
        let reply: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "Hi there!");
        assert_eq!(reply.message.as_deref(), Some("hello"));
    }

    #[test]
    fn test_response_parsing_without_echo() {
        let json = r#"{"response":"Hi there!"}"#;
        let reply: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(reply.response, "Hi there!");
        assert_eq!(reply.message, None);
    }

    #[test]
    fn test_response_rejects_missing_response_field() {
        let json = r#"{"status":"ok"}"#;
        assert!(serde_json::from_str::<ChatResponse>(json).is_err());
    }

    #[test]
    fn test_response_rejects_non_json_body() {
        let body = "<html><body>Server Error (500)</body></html>";
        assert!(serde_json::from_str::<ChatResponse>(body).is_err());
    }
}
