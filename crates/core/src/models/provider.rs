//! Wire shape of the scheduling provider's availability response.
//!
//! The provider groups slots under date keys:
//!
//! ```json
//! { "status": "success", "data": { "slots": { "2025-04-21": [{ "time": "2025-04-21T10:00:00Z" }] } } }
//! ```
//!
//! Date keys are kept in document order, so flattening follows the order the
//! provider sent. A `null` slot mapping or date bucket reads as empty.

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::{
    errors::{SlotError, SlotResult},
    models::slot::{flatten_buckets, FlatSlot, RawSlot, SlotBucket},
};

pub const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub data: Option<ProviderData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderData {
    #[serde(default, deserialize_with = "ordered_buckets")]
    pub slots: Vec<SlotBucket>,
}

impl ProviderResponse {
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Turns a successful response into flat slots.
    ///
    /// Any status other than `success` is a provider error, whatever else the
    /// body contains.
    pub fn into_flat_slots(self) -> SlotResult<Vec<FlatSlot>> {
        if !self.is_success() {
            return Err(SlotError::Provider("slot retrieval failed".to_string()));
        }

        let buckets = self.data.map(|data| data.slots).unwrap_or_default();
        Ok(flatten_buckets(buckets))
    }
}

fn ordered_buckets<'de, D>(deserializer: D) -> Result<Vec<SlotBucket>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OrderedBuckets>::deserialize(deserializer)?
        .map(|buckets| buckets.0)
        .unwrap_or_default())
}

struct OrderedBuckets(Vec<SlotBucket>);

impl<'de> Deserialize<'de> for OrderedBuckets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_map(BucketVisitor)
            .map(OrderedBuckets)
    }
}

struct BucketVisitor;

impl<'de> Visitor<'de> for BucketVisitor {
    type Value = Vec<SlotBucket>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of dates to slot lists")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut buckets = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((date, slots)) = map.next_entry::<String, Option<Vec<RawSlot>>>()? {
            buckets.push(SlotBucket {
                date,
                slots: slots.unwrap_or_default(),
            });
        }
        Ok(buckets)
    }
}
