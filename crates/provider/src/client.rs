//! # Cal.com client
//!
//! Queries the provider's `GET /slots/available` endpoint for one time window
//! and turns the date-grouped answer into flat slots.
//!
//! One request per call; failures go straight back to the caller without retry.

use async_trait::async_trait;
use eyre::WrapErr;
use reqwest::header::CONTENT_TYPE;
use slotproxy_core::{
    errors::{SlotError, SlotResult},
    models::{
        provider::ProviderResponse,
        slot::{FlatSlot, TimeWindow},
    },
};
use tracing::debug;

use crate::{config::ProviderConfig, SlotProvider};

/// HTTP client for the Cal.com v2 availability API.
#[derive(Debug, Clone)]
pub struct CalComClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl CalComClient {
    /// Creates a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// * `SlotError::Configuration` - the API key is empty
    /// * `SlotError::Transport` - the underlying HTTP client could not be built
    pub fn new(config: ProviderConfig) -> SlotResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("slotproxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Self::with_client(config, http)
    }

    /// Creates a client that shares an existing connection pool.
    pub fn with_client(config: ProviderConfig, http: reqwest::Client) -> SlotResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(SlotError::Configuration(
                "CALCOM_API_KEY must not be empty".to_string(),
            ));
        }

        Ok(Self { http, config })
    }

    /// Fetches slots for an explicit window.
    pub async fn fetch_window(
        &self,
        window: &TimeWindow,
        duration: u32,
    ) -> SlotResult<Vec<FlatSlot>> {
        let query = [
            ("startTime", window.start_param()),
            ("endTime", window.end_param()),
            ("eventTypeId", self.config.event_type_id.to_string()),
            ("eventTypeSlug", self.config.event_type_slug.clone()),
            ("duration", duration.to_string()),
        ];

        debug!(
            start = %query[0].1,
            end = %query[1].1,
            duration,
            "Querying provider availability"
        );

        let response = self
            .http
            .get(self.config.slots_url())
            .bearer_auth(&self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
            .query(&query)
            .send()
            .await
            .wrap_err("Failed to reach scheduling provider")?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .wrap_err("Failed to read scheduling provider response")?;

        let parsed: ProviderResponse = serde_json::from_slice(&body).wrap_err_with(|| {
            format!("Scheduling provider returned an unreadable body (HTTP {status})")
        })?;

        let slots = parsed.into_flat_slots()?;
        debug!(count = slots.len(), "Provider returned slots");

        Ok(slots)
    }
}

#[async_trait]
impl SlotProvider for CalComClient {
    async fn fetch_available_slots(
        &self,
        days_ahead: u32,
        duration: u32,
    ) -> SlotResult<Vec<FlatSlot>> {
        let window = TimeWindow::from_now(days_ahead);
        self.fetch_window(&window, duration).await
    }
}
