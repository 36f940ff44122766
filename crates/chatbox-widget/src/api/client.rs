//! Client for the page's chat endpoint.

use gloo_net::http::Request;

use chatbox_core::{ChatRequest, ChatResponse};

use crate::error::SendError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// POST one chat request and decode the JSON reply.
///
/// One call per submission, never retried. Concurrent calls are fine and
/// resolve in whatever order the network delivers them.
pub async fn send_message(endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, SendError> {
    let response = Request::post(endpoint)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(request.to_form_encoded())?
        .send()
        .await?;

    if !response.ok() {
        return Err(SendError::Status(response.status()));
    }

    Ok(response.json::<ChatResponse>().await?)
}
