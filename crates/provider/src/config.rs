//! # Provider Configuration
//!
//! Settings for the Cal.com client, read from the environment:
//!
//! - `CALCOM_API_KEY`: Bearer token for the provider API (required)
//! - `CALCOM_API_URL`: Base URL of the v2 API (default: "https://api.cal.com/v2")
//! - `CALCOM_EVENT_TYPE_ID`: Event type whose slots are queried (default: 2317091)
//! - `CALCOM_EVENT_TYPE_SLUG`: Slug of that event type (default: "ai-voice-agent-demo-meeting")

use eyre::{eyre, Result};
use std::{env, fmt};

pub const DEFAULT_BASE_URL: &str = "https://api.cal.com/v2";
pub const DEFAULT_EVENT_TYPE_ID: u64 = 2317091;
pub const DEFAULT_EVENT_TYPE_SLUG: &str = "ai-voice-agent-demo-meeting";

/// Connection and event type settings for the scheduling provider.
///
/// The event type is fixed per deployment; callers of the HTTP API cannot
/// choose it.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Bearer token sent with every request
    pub api_key: String,
    /// Base URL the `/slots/available` path is appended to
    pub base_url: String,
    /// Numeric event type identifier
    pub event_type_id: u64,
    /// Event type slug
    pub event_type_slug: String,
}

impl ProviderConfig {
    /// Config for the public Cal.com API with the default event type.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            event_type_id: DEFAULT_EVENT_TYPE_ID,
            event_type_slug: DEFAULT_EVENT_TYPE_SLUG.to_string(),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("CALCOM_API_KEY")
            .map_err(|_| eyre!("CALCOM_API_KEY environment variable not set"))?;

        let base_url = env::var("CALCOM_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let event_type_id = match env::var("CALCOM_EVENT_TYPE_ID") {
            Ok(id) => id
                .parse::<u64>()
                .map_err(|_| eyre!("CALCOM_EVENT_TYPE_ID must be a valid u64"))?,
            Err(_) => DEFAULT_EVENT_TYPE_ID,
        };

        let event_type_slug = env::var("CALCOM_EVENT_TYPE_SLUG")
            .unwrap_or_else(|_| DEFAULT_EVENT_TYPE_SLUG.to_string());

        Ok(Self {
            api_key,
            base_url,
            event_type_id,
            event_type_slug,
        })
    }

    /// URL of the availability query
    pub fn slots_url(&self) -> String {
        format!("{}/slots/available", self.base_url.trim_end_matches('/'))
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("event_type_id", &self.event_type_id)
            .field("event_type_slug", &self.event_type_slug)
            .finish()
    }
}
