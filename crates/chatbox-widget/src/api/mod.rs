//! HTTP transport for the chat endpoint.

mod client;

pub use client::*;
