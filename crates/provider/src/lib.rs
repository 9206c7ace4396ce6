//! # slotproxy provider
//!
//! Client side of the scheduling provider. [`SlotProvider`] is the seam the
//! HTTP layer depends on; [`client::CalComClient`] is the production
//! implementation and [`mock::MockSlotProvider`] stands in for it in tests.

pub mod client;
pub mod config;
pub mod mock;

use async_trait::async_trait;
use slotproxy_core::{errors::SlotResult, models::slot::FlatSlot};

/// Source of bookable slots for the configured event type.
#[async_trait]
pub trait SlotProvider: Send + Sync {
    /// Fetches every slot from now until `days_ahead` calendar days from now,
    /// for meetings lasting `duration` minutes.
    ///
    /// # Errors
    ///
    /// * `SlotError::Transport` - the provider could not be reached or sent an unreadable body
    /// * `SlotError::Provider` - the provider answered with a non-success status
    async fn fetch_available_slots(&self, days_ahead: u32, duration: u32)
        -> SlotResult<Vec<FlatSlot>>;
}
