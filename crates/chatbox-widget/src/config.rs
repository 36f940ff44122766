//! Widget configuration.

use chatbox_core::{wire, FALLBACK_REPLY};

/// Element names and behavior switches for one chat page.
///
/// The defaults match the stock host template: a `#chat-form` form with a
/// `#user-input` text field and hidden `session_id` and
/// `csrfmiddlewaretoken` fields, plus a scrollable `#chat-box` container.
/// Templates that name things differently override the fields before
/// mounting.
#[derive(Debug, Clone)]
pub struct ChatBoxConfig {
    /// Id of the form whose submissions are intercepted.
    pub form_id: String,
    /// Id of the text input the user types into.
    pub input_id: String,
    /// Id of the scrollable message container.
    pub container_id: String,
    /// `name` attribute of the hidden field carrying the session token.
    pub session_field: String,
    /// `name` attribute of the hidden field carrying the anti-forgery token.
    pub csrf_field: String,
    /// Explicit submission endpoint. Defaults to the current page path.
    pub endpoint: Option<String>,
    /// Bot text rendered when a submission fails for any reason.
    pub fallback_reply: String,
    /// Render message text as raw HTML instead of escaped text.
    ///
    /// Off by default. Turning it on lets any rendered message inject
    /// markup into the page, so it is only safe when the endpoint's
    /// output is trusted.
    pub render_markup: bool,
}

impl Default for ChatBoxConfig {
    fn default() -> Self {
        Self {
            form_id: "chat-form".to_owned(),
            input_id: "user-input".to_owned(),
            container_id: "chat-box".to_owned(),
            session_field: wire::SESSION_FIELD.to_owned(),
            csrf_field: wire::CSRF_FIELD.to_owned(),
            endpoint: None,
            fallback_reply: FALLBACK_REPLY.to_owned(),
            render_markup: false,
        }
    }
}

impl ChatBoxConfig {
    /// Set an explicit submission endpoint instead of the page path.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the bot text rendered when a submission fails.
    pub fn with_fallback_reply(mut self, text: impl Into<String>) -> Self {
        self.fallback_reply = text.into();
        self
    }

    /// Opt in to rendering message text as raw HTML.
    pub fn with_render_markup(mut self, render_markup: bool) -> Self {
        self.render_markup = render_markup;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_template() {
        let config = ChatBoxConfig::default();
        assert_eq!(config.form_id, "chat-form");
        assert_eq!(config.input_id, "user-input");
        assert_eq!(config.container_id, "chat-box");
        assert_eq!(config.session_field, "session_id");
        assert_eq!(config.csrf_field, "csrfmiddlewaretoken");
        assert_eq!(config.endpoint, None);
        assert_eq!(
            config.fallback_reply,
            "Sorry, there was an error processing your request."
        );
        assert!(!config.render_markup);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ChatBoxConfig::default()
            .with_endpoint("/chat/")
            .with_fallback_reply("The bot is napping.")
            .with_render_markup(true);
        assert_eq!(config.endpoint.as_deref(), Some("/chat/"));
        assert_eq!(config.fallback_reply, "The bot is napping.");
        assert!(config.render_markup);
    }
}
