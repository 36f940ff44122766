//! Chatbox Core Domain Types
//!
//! This crate contains pure domain and wire types with no dependencies on:
//! - The DOM or any other browser API
//! - Network transport
//! - Runtime specifics
//!
//! All types here describe the message exchange the chat-box widget renders.

pub mod draft;
pub mod message;
pub mod token;
pub mod wire;

// Re-export commonly used types
pub use draft::Draft;
pub use message::{Author, ChatMessage, FALLBACK_REPLY};
pub use token::{CsrfToken, SessionToken};
pub use wire::{ChatRequest, ChatResponse};
