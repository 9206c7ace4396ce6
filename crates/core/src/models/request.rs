use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::slot::FormattedSlot;

pub const DEFAULT_DAYS: u32 = 7;
pub const DEFAULT_DURATION: u32 = 30;

/// Parameters of an availability request after defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    pub days: u32,
    pub duration: u32,
}

impl Default for SlotQuery {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            duration: DEFAULT_DURATION,
        }
    }
}

impl SlotQuery {
    /// Reads `days` and `duration` from an optional JSON request body.
    ///
    /// Never fails. An empty or malformed body, or a field that is missing,
    /// non-numeric or out of range, falls back to the default for that field
    /// only. Numeric strings are read up to the first non-digit, so `"12abc"`
    /// counts as 12; fractional numbers are truncated.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };

        let days = fields
            .get("days")
            .and_then(leading_integer)
            .and_then(|days| u32::try_from(days).ok())
            .unwrap_or(DEFAULT_DAYS);

        let duration = fields
            .get("duration")
            .and_then(leading_integer)
            .and_then(|duration| u32::try_from(duration).ok())
            .filter(|duration| *duration > 0)
            .unwrap_or(DEFAULT_DURATION);

        Self { days, duration }
    }
}

fn leading_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite())
                .map(|float| float.trunc() as i64)
        }),
        Value::String(text) => {
            let text = text.trim_start();
            let (sign, digits) = match text.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, text.strip_prefix('+').unwrap_or(text)),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}

/// Body of a successful availability response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub status: String,
    pub slots: Vec<FormattedSlot>,
    pub parameters: SlotQuery,
}

impl SlotsResponse {
    pub fn success(slots: Vec<FormattedSlot>, parameters: SlotQuery) -> Self {
        Self {
            status: "success".to_string(),
            slots,
            parameters,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            error,
        }
    }
}
