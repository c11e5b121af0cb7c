use axum::extract::Request;
use axum::http::StatusCode;
use tracing::{info, Span};

/// Largest request body the default handler will buffer for logging.
const MAX_LOGGED_BODY: usize = 1024 * 1024;

/// Span for `TraceLayer`: one id per request so interleaved logs can be told
/// apart.
pub fn make_request_span(req: &Request) -> Span {
    tracing::info_span!(
        "request",
        id = %uuid::Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    )
}

/// Fallback for `/` and unmatched routes: dump the request and answer `OK`.
pub async fn default_handler(req: Request) -> (StatusCode, &'static str) {
    let (parts, body) = req.into_parts();

    info!(method = %parts.method, "request method");
    info!(uri = %parts.uri, "request uri");
    info!(scheme = parts.uri.scheme_str().unwrap_or(""), "request url scheme");
    info!(host = parts.uri.host().unwrap_or(""), "request url host");
    info!(path = parts.uri.path(), "request url path");
    info!(query = parts.uri.query().unwrap_or(""), "request url raw query");
    for (name, value) in &parts.headers {
        info!(
            header = %name,
            value = %String::from_utf8_lossy(value.as_bytes()),
            "request header"
        );
    }

    match axum::body::to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => info!(body = %String::from_utf8_lossy(&bytes), "request body"),
        Err(e) => tracing::warn!(error = %e, "failed to read request body"),
    }

    (StatusCode::OK, "OK")
}
