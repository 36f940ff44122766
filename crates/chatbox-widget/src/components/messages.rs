//! Message rendering into the scrollable chat container.

use chatbox_core::{Author, ChatMessage};
use web_sys::{Document, Element};

use crate::error::ChatBoxError;

/// Appends message bubbles to the chat container and keeps it scrolled
/// to the newest entry.
#[derive(Debug, Clone)]
pub struct MessageList {
    document: Document,
    container: Element,
    render_markup: bool,
}

impl MessageList {
    /// Wrap the resolved container element.
    pub fn new(document: Document, container: Element, render_markup: bool) -> Self {
        Self {
            document,
            container,
            render_markup,
        }
    }

    /// Append a message bubble as the container's last child and scroll
    /// it into view.
    pub fn append(&self, message: &ChatMessage) -> Result<(), ChatBoxError> {
        let row = self.styled("div", row_class(message.author))?;
        let avatar = self.styled("div", avatar_class(message.author))?;
        let icon = self.styled("i", avatar_icon(message.author))?;
        avatar.append_child(&icon).map_err(ChatBoxError::from_js)?;

        let content = self.styled("div", "message-content")?;
        if self.render_markup {
            content.set_inner_html(&message.text);
        } else {
            content.set_text_content(Some(&message.text));
        }

        // User rows lead with the text, bot rows with the avatar.
        match message.author {
            Author::User => {
                row.append_child(&content).map_err(ChatBoxError::from_js)?;
                row.append_child(&avatar).map_err(ChatBoxError::from_js)?;
            }
            Author::Bot => {
                row.append_child(&avatar).map_err(ChatBoxError::from_js)?;
                row.append_child(&content).map_err(ChatBoxError::from_js)?;
            }
        }

        self.container
            .append_child(&row)
            .map_err(ChatBoxError::from_js)?;
        self.scroll_to_latest();
        Ok(())
    }

    /// Pin the container's scroll position to its maximum extent.
    ///
    /// Also called once at mount, since the server may have rendered
    /// history into the container before the widget loaded.
    pub fn scroll_to_latest(&self) {
        self.container.set_scroll_top(self.container.scroll_height());
    }

    fn styled(&self, tag: &str, class: &str) -> Result<Element, ChatBoxError> {
        let element = self
            .document
            .create_element(tag)
            .map_err(ChatBoxError::from_js)?;
        element.set_class_name(class);
        Ok(element)
    }
}

fn row_class(author: Author) -> &'static str {
    match author {
        Author::User => "chat-message user-message",
        Author::Bot => "chat-message bot-message",
    }
}

fn avatar_class(author: Author) -> &'static str {
    match author {
        Author::User => "avatar user-avatar",
        Author::Bot => "avatar bot-avatar",
    }
}

fn avatar_icon(author: Author) -> &'static str {
    match author {
        Author::User => "fa fa-user",
        Author::Bot => "fa fa-android",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_bubble_classes() {
        assert_eq!(row_class(Author::User), "chat-message user-message");
        assert_eq!(avatar_class(Author::User), "avatar user-avatar");
        assert_eq!(avatar_icon(Author::User), "fa fa-user");
    }

    #[test]
    fn test_bot_bubble_classes() {
        assert_eq!(row_class(Author::Bot), "chat-message bot-message");
        assert_eq!(avatar_class(Author::Bot), "avatar bot-avatar");
        assert_eq!(avatar_icon(Author::Bot), "fa fa-android");
    }
}
