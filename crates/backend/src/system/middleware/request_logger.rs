use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_bytes;

/// Header carrying the browser session id, set by the frontend.
pub const SESSION_HEADER: &str = "x-session-id";

/// HTTP request logging middleware
///
/// Prints one console line per request:
/// - timestamp (local time)
/// - duration (ms)
/// - response size
/// - status code
/// - method, path and session
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let session = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(short_session)
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Buffer the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("{} {}: failed to read response body: {}", method, uri.path(), e);
            println!(
                "\x1b[33m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {} [{}]",
                Local::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path(),
                session
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    // Cyan for success, yellow for everything else
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {} [{}]",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_bytes(bytes.len()),
        parts.status.as_u16(),
        method,
        uri.path(),
        session
    );

    Response::from_parts(parts, Body::from(bytes))
}

/// First block of the uuid is enough to tell sessions apart in the console.
fn short_session(id: &str) -> String {
    id.split('-').next().unwrap_or(id).chars().take(8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_session() {
        assert_eq!(short_session("67e55044-10b1-426f-9247-bb680e5fe0c8"), "67e55044");
        assert_eq!(short_session("abc"), "abc");
        assert_eq!(short_session("0123456789abcdef"), "01234567");
    }
}
