//! # CORS
//!
//! Browser access to the slots endpoint: any origin, `POST` and `OPTIONS`,
//! `Content-Type` and `Authorization` request headers, preflight cached for
//! 24 hours.
//!
//! `CorsLayer` answers preflights itself with `200 OK`; [`preflight_no_content`]
//! rewrites those to `204 No Content` on the slots endpoint only.

use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};

use crate::routes::slots::SLOTS_PATH;

pub const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Permissive CORS policy for the slots endpoint
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Turns successful `OPTIONS` responses on the slots endpoint into `204 No Content`
pub async fn preflight_no_content(request: Request, next: Next) -> Response {
    let rewrite = request.method() == Method::OPTIONS && request.uri().path() == SLOTS_PATH;
    let mut response = next.run(request).await;

    if rewrite && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }

    response
}
