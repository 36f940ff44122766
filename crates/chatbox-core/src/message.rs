//! Chat message types rendered into the page.

/// Author of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    /// Message typed into the input field.
    User,
    /// Message produced by the server-side bot.
    Bot,
}

/// A single message shown in the chat container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who authored this message.
    pub author: Author,
    /// Message text.
    pub text: String,
}

/// Bot text rendered when a request cannot be completed.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

impl ChatMessage {
    /// Create a new chat message.
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
        }
    }

    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text)
    }

    /// Create a bot message.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Author::Bot, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.author, Author::User);
        assert_eq!(msg.text, "hello");

        let msg = ChatMessage::bot("hi back");
        assert_eq!(msg.author, Author::Bot);
        assert_eq!(msg.text, "hi back");
    }

    #[test]
    fn test_fallback_reply_text() {
        assert_eq!(
            FALLBACK_REPLY,
            "Sorry, there was an error processing your request."
        );
    }
}
