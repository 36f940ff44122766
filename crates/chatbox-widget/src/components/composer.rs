//! Input handling for the chat form.

use chatbox_core::Draft;
use web_sys::HtmlInputElement;

/// Reads and clears the message input field.
#[derive(Debug, Clone)]
pub struct Composer {
    input: HtmlInputElement,
}

impl Composer {
    /// Wrap the resolved input element.
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }

    /// Take the current draft, clearing the field on acceptance.
    ///
    /// Empty and whitespace-only text is rejected and the field is left
    /// untouched, so an empty submission changes nothing on the page.
    pub fn take_draft(&self) -> Option<Draft> {
        let draft = Draft::new(&self.input.value())?;
        self.input.set_value("");
        Some(draft)
    }
}
