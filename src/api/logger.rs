//! Request logging middleware.
//!
//! Records the method and target of every request before it is routed.
//! It never rejects or rewrites anything.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Format a request as `[METHOD] /path?query`.
pub(crate) fn request_line(request: &Request) -> String {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| request.uri().path());

    format!(
        "[{}] {}",
        request.method().as_str().to_uppercase(),
        target
    )
}

pub async fn log_request(request: Request, next: Next) -> Response {
    info!("{}", request_line(&request));
    next.run(request).await
}
