use contracts::shared::callbacks::{BindingDescriptor, UpdateRequest, UpdateResponse};
use contracts::shared::component::Component;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Header carrying the browser session id, shown in the server request log.
pub const SESSION_HEADER: &str = "x-session-id";

/// Fetch the page component tree
pub async fn get_page_layout() -> Result<Component, String> {
    let response = Request::get(&api_url("/api/page/layout"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the binding table of the page
pub async fn get_dependencies() -> Result<Vec<BindingDescriptor>, String> {
    let response = Request::get(&api_url("/api/page/dependencies"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `Ok(None)` when no server binding depends on the changed input (204).
pub async fn post_update(
    session_id: &str,
    request: &UpdateRequest,
) -> Result<Option<UpdateResponse>, String> {
    let response = Request::post(&api_url("/api/page/update"))
        .header(SESSION_HEADER, session_id)
        .json(request)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 204 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
