use chrono::{DateTime, Days, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The span of time an availability query covers.
///
/// `end` is `start` moved forward by whole calendar days, so `start <= end`
/// always holds. A zero-day window has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Builds a window that opens at `start` and closes `days` calendar days later.
    ///
    /// Windows that would run past the representable range are clamped to it.
    pub fn days_from(start: DateTime<Utc>, days: u32) -> Self {
        let end = start
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self { start, end }
    }

    /// Builds a window that opens now.
    pub fn from_now(days: u32) -> Self {
        Self::days_from(Utc::now(), days)
    }

    /// Start of the window as an ISO-8601 UTC string with millisecond precision.
    pub fn start_param(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// End of the window as an ISO-8601 UTC string with millisecond precision.
    pub fn end_param(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// A single slot as the provider lists it under a date key.
///
/// A missing or `null` time reads as an empty string; any other non-string
/// value keeps its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSlot {
    #[serde(default, deserialize_with = "lenient_time")]
    pub time: String,
}

fn lenient_time<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(time) => time,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// One date key of the provider's slot mapping with its slots in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBucket {
    pub date: String,
    pub slots: Vec<RawSlot>,
}

/// A slot lifted out of its date bucket.
///
/// `time` is the provider's timestamp exactly as received; localization is
/// left to the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSlot {
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSlot {
    pub date: String,
    pub time: String,
    pub formatted_time: String,
}

impl FormattedSlot {
    pub fn new(slot: FlatSlot, formatted_time: String) -> Self {
        Self {
            date: slot.date,
            time: slot.time,
            formatted_time,
        }
    }
}

/// Flattens date buckets into one sequence, bucket order first and slot order second.
pub fn flatten_buckets(buckets: Vec<SlotBucket>) -> Vec<FlatSlot> {
    buckets
        .into_iter()
        .flat_map(|bucket| {
            let date = bucket.date;
            bucket.slots.into_iter().map(move |slot| FlatSlot {
                date: date.clone(),
                time: slot.time,
            })
        })
        .collect()
}
