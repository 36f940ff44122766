//! One-time resolution of the host page's chat elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use chatbox_core::{CsrfToken, SessionToken};

use crate::config::ChatBoxConfig;
use crate::error::ChatBoxError;

/// References to the elements the host template owns.
///
/// Elements are looked up once at mount time. Field *values* are read
/// fresh on every submission, since the server may rotate the
/// anti-forgery token between requests.
#[derive(Debug, Clone)]
pub struct ChatDom {
    document: Document,
    form: HtmlFormElement,
    input: HtmlInputElement,
    session_input: HtmlInputElement,
    csrf_input: HtmlInputElement,
    container: Element,
}

impl ChatDom {
    /// Resolve every element named by the configuration.
    ///
    /// Fails with the first missing or mistyped element so the mount
    /// error pinpoints what the template lacks.
    pub fn resolve(config: &ChatBoxConfig) -> Result<Self, ChatBoxError> {
        let window = web_sys::window().ok_or(ChatBoxError::WindowUnavailable)?;
        let document = window
            .document()
            .ok_or(ChatBoxError::DocumentUnavailable)?;

        let form = by_id::<HtmlFormElement>(&document, &config.form_id, "form")?;
        let input = by_id::<HtmlInputElement>(&document, &config.input_id, "input")?;
        let session_input = hidden_field(&document, &config.session_field)?;
        let csrf_input = hidden_field(&document, &config.csrf_field)?;

        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| ChatBoxError::ElementMissing {
                selector: format!("#{}", config.container_id),
            })?;

        Ok(Self {
            document,
            form,
            input,
            session_input,
            csrf_input,
            container,
        })
    }

    /// The page document, for creating new nodes.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The form whose submissions the widget intercepts.
    pub fn form(&self) -> &HtmlFormElement {
        &self.form
    }

    /// The text input the user types into.
    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    /// The scrollable message container.
    pub fn container(&self) -> &Element {
        &self.container
    }

    /// The session token as of this moment.
    pub fn session_token(&self) -> SessionToken {
        SessionToken::new(self.session_input.value())
    }

    /// The anti-forgery token as of this moment.
    pub fn csrf_token(&self) -> CsrfToken {
        CsrfToken::new(self.csrf_input.value())
    }
}

/// Path component of the page's own URL, the default submission endpoint.
pub fn page_path() -> Result<String, ChatBoxError> {
    let window = web_sys::window().ok_or(ChatBoxError::WindowUnavailable)?;
    window.location().pathname().map_err(ChatBoxError::from_js)
}

fn by_id<T>(document: &Document, id: &str, expected: &'static str) -> Result<T, ChatBoxError>
where
    T: JsCast,
{
    let selector = format!("#{id}");
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| ChatBoxError::ElementMissing {
            selector: selector.clone(),
        })?;
    element
        .dyn_into::<T>()
        .map_err(|_| ChatBoxError::ElementType { selector, expected })
}

fn hidden_field(document: &Document, name: &str) -> Result<HtmlInputElement, ChatBoxError> {
    let selector = format!("input[name='{name}']");
    let element = document
        .query_selector(&selector)
        .map_err(ChatBoxError::from_js)?
        .ok_or_else(|| ChatBoxError::ElementMissing {
            selector: selector.clone(),
        })?;
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ChatBoxError::ElementType {
            selector,
            expected: "input",
        })
}
