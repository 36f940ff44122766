//! Chatbox widget
//!
//! Browser-side chat box for server-rendered bot pages. The host template
//! owns the markup: a chat form with a text input, hidden session and
//! anti-forgery fields, and a scrollable message container. This crate
//! binds to those elements, intercepts form submissions, POSTs each
//! message to the page's own path as a classic form body, and appends the
//! exchanged messages as styled bubbles.
//!
//! Loading the compiled module on a page mounts the widget against the
//! default element names. Embedders can instead mount explicitly with
//! [`ChatBox::mount`] and a custom [`ChatBoxConfig`].

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod widget;

pub use config::ChatBoxConfig;
pub use error::{ChatBoxError, SendError};
pub use widget::ChatBox;

/// Mount on module load, against the stock template names.
///
/// A page without the chat markup keeps working; the mount failure is
/// only logged.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(err) = ChatBox::mount(ChatBoxConfig::default()) {
        widget::log_error(&err.to_string());
    }
}
