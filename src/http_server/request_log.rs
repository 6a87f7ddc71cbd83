//! Request logging middleware
//!
//! Emits one `HTTP_REQUEST` line per request with method, path, status
//! and duration. Server errors log at ERROR, client errors at WARN.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::observability::{log_event_at, Event, Severity, Timer};

pub async fn log_requests(request: Request, next: Next) -> Response {
    let timer = Timer::new();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let severity = if status.is_server_error() {
        Severity::Error
    } else if status.is_client_error() {
        Severity::Warn
    } else {
        Severity::Info
    };

    let status_code = status.as_u16().to_string();
    let duration_ms = timer.elapsed_ms();
    log_event_at(
        severity,
        Event::HttpRequest,
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("status", status_code.as_str()),
            ("duration_ms", duration_ms.as_str()),
        ],
    );

    response
}
