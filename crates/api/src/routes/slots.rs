use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub const SLOTS_PATH: &str = "/api/available-slots";

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        SLOTS_PATH,
        post(handlers::slots::available_slots)
            .options(handlers::slots::preflight)
            .fallback(handlers::slots::method_not_allowed),
    )
}
