//! Newtype wrappers for the server-issued tokens forwarded on every request.
//!
//! Both values are read from hidden form fields and owned by the server:
//! this component never mints or mutates them, so neither type has a
//! generator.

use std::fmt;

/// Opaque token correlating requests to a server-held conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Create a new SessionToken from a string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Anti-forgery token proving the request originated from the served form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Create a new CsrfToken from a string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the inner string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CsrfToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CsrfToken {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = SessionToken::new("sess-42");
        assert_eq!(format!("{}", token), "sess-42");
    }

    #[test]
    fn test_token_forwarded_unchanged() {
        let raw = "  oddly spaced  ";
        let token = CsrfToken::from(raw);
        assert_eq!(token.as_str(), raw);
        assert_eq!(token.into_inner(), raw);
    }
}
