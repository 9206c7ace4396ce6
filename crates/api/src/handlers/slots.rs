//! # Slot Handlers
//!
//! `POST /api/available-slots` fetches availability from the provider and
//! returns it with a conversational, IST-localized time next to each raw
//! timestamp.
//!
//! The request body is optional and read leniently: anything missing or
//! unreadable falls back to the defaults (7 days, 30 minutes). Only
//! provider and transport failures fail the request; a slot whose time
//! cannot be formatted is returned with `"Invalid Date"` as its display text.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use slotproxy_core::{
    errors::SlotError,
    formatting::{try_format_conversational_date, INVALID_DATE},
    models::{
        request::{SlotQuery, SlotsResponse},
        slot::{FlatSlot, FormattedSlot},
    },
};
use tracing::{info, warn};

use crate::{middleware::error_handling::AppError, ApiState};

/// Returns available slots for the configured event type
///
/// # Endpoint
///
/// ```text
/// POST /api/available-slots
/// { "days": 7, "duration": 30 }
/// ```
///
/// # Errors
///
/// * `SlotError::Transport` - provider unreachable or body unreadable (500)
/// * `SlotError::Provider` - provider reported a failure (500)
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    body: Bytes,
) -> Result<Json<SlotsResponse>, AppError> {
    let query = SlotQuery::from_body(&body);

    let slots = state
        .provider
        .fetch_available_slots(query.days, query.duration)
        .await?;

    info!(
        days = query.days,
        duration = query.duration,
        count = slots.len(),
        "Fetched available slots"
    );

    let slots = slots.into_iter().map(localize_slot).collect();

    Ok(Json(SlotsResponse::success(slots, query)))
}

/// Answers a bare `OPTIONS` request
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Rejects every method the endpoint does not serve
pub async fn method_not_allowed() -> AppError {
    AppError(SlotError::MethodNotAllowed)
}

fn localize_slot(slot: FlatSlot) -> FormattedSlot {
    let formatted_time = match try_format_conversational_date(&slot.time) {
        Ok(formatted) => formatted,
        Err(err) => {
            warn!(date = %slot.date, error = %err, "Unable to format slot time");
            INVALID_DATE.to_string()
        }
    };

    FormattedSlot::new(slot, formatted_time)
}
