//! UI components bound to the resolved page elements.

mod composer;
mod messages;

pub use composer::Composer;
pub use messages::MessageList;
