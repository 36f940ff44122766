//! Validation for outgoing message text.

use std::fmt;

/// A validated, non-empty outgoing message.
///
/// Construction trims leading/trailing whitespace and rejects an empty
/// result, so the send path never re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft(String);

impl Draft {
    /// Validate raw input-field text into a sendable draft.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    /// Get the draft text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the draft text.
    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(Draft::new(""), None);
    }

    #[test]
    fn test_rejects_whitespace_only_input() {
        assert_eq!(Draft::new("   "), None);
        assert_eq!(Draft::new("\n\t "), None);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let draft = Draft::new("  hello  ").unwrap();
        assert_eq!(draft.as_str(), "hello");
    }

    #[test]
    fn test_keeps_interior_whitespace() {
        let draft = Draft::new(" any good sci-fi movies? ").unwrap();
        assert_eq!(draft.as_str(), "any good sci-fi movies?");
        assert_eq!(draft.into_text(), "any good sci-fi movies?");
    }
}
