//! Request logging middleware

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::{log_event_with_fields, Event};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Tag each request with a fresh id, log its outcome, and echo the id
/// back in `x-request-id`.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_millis().to_string();
    let status = response.status().as_u16().to_string();
    log_event_with_fields(
        Event::RequestComplete,
        &[
            ("request_id", &request_id),
            ("method", &method),
            ("path", &path),
            ("status", &status),
            ("elapsed_ms", &elapsed_ms),
        ],
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
