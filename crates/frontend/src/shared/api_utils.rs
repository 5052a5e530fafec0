//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend from `dist/`, so requests go to the
//! same origin the page was loaded from.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "http://localhost:8640"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/page/layout");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
