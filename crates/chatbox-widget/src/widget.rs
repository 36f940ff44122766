//! Mounting and submit wiring.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use chatbox_core::{ChatMessage, ChatRequest};

use crate::api;
use crate::components::{Composer, MessageList};
use crate::config::ChatBoxConfig;
use crate::dom::{self, ChatDom};
use crate::error::ChatBoxError;

/// A chat box wired to the host page.
///
/// [`ChatBox::mount`] resolves the page's chat elements once, scrolls any
/// server-rendered history into view, and attaches the submit handler.
/// Meant to run once per page load; the handler stays attached for the
/// lifetime of the page.
#[derive(Debug, Clone)]
pub struct ChatBox {
    dom: ChatDom,
    composer: Composer,
    messages: MessageList,
    endpoint: String,
    fallback_reply: String,
}

impl ChatBox {
    /// Bind the widget to the current page.
    pub fn mount(config: ChatBoxConfig) -> Result<Self, ChatBoxError> {
        let dom = ChatDom::resolve(&config)?;
        let endpoint = match &config.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => dom::page_path()?,
        };

        let widget = Self {
            composer: Composer::new(dom.input().clone()),
            messages: MessageList::new(
                dom.document().clone(),
                dom.container().clone(),
                config.render_markup,
            ),
            dom,
            endpoint,
            fallback_reply: config.fallback_reply,
        };

        widget.messages.scroll_to_latest();
        widget.attach()?;
        Ok(widget)
    }

    /// Intercept the form's submit event for the lifetime of the page.
    fn attach(&self) -> Result<(), ChatBoxError> {
        let widget = self.clone();
        let on_submit = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            widget.submit();
        });

        self.dom
            .form()
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
            .map_err(ChatBoxError::from_js)?;

        // Leak the closure so the handler outlives this call.
        on_submit.forget();
        Ok(())
    }

    /// One submission cycle.
    ///
    /// Renders the user's bubble right away, then posts the message and
    /// renders the reply bubble, or the fallback reply, when the exchange
    /// resolves. Tokens are read fresh here; the server may have rotated
    /// them since the last submission.
    fn submit(&self) {
        let draft = match self.composer.take_draft() {
            Some(draft) => draft,
            None => return,
        };

        if let Err(err) = self.messages.append(&ChatMessage::user(draft.as_str())) {
            log_error(&err.to_string());
        }

        let request = ChatRequest::new(
            draft.into_text(),
            self.dom.session_token(),
            self.dom.csrf_token(),
        );

        let widget = self.clone();
        spawn_local(async move {
            let reply = match api::send_message(&widget.endpoint, &request).await {
                Ok(reply) => ChatMessage::bot(reply.response),
                Err(err) => {
                    log_error(&err.to_string());
                    ChatMessage::bot(widget.fallback_reply.clone())
                }
            };

            if let Err(err) = widget.messages.append(&reply) {
                log_error(&err.to_string());
            }
        });
    }
}

pub(crate) fn log_error(message: &str) {
    web_sys::console::error_1(&format!("chatbox: {message}").into());
}
