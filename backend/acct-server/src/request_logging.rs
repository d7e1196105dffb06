//! Access log middleware.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Log method, path, status and latency of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_seq = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    log::debug!("[req={}] -> {} {}", request_seq, method, path);

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis();
    if status.is_server_error() {
        log::error!(
            "[req={}] <- {} {} {} ({}ms)",
            request_seq,
            method,
            path,
            status.as_u16(),
            elapsed_ms
        );
    } else {
        log::info!(
            "[req={}] <- {} {} {} ({}ms)",
            request_seq,
            method,
            path,
            status.as_u16(),
            elapsed_ms
        );
    }

    response
}
