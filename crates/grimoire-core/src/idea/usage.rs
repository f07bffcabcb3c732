use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Usage signals for one idea, supplied by the caller on each call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageContext {
    /// Number of shows (or other collections) referencing the idea
    #[serde(default, deserialize_with = "deserialize_count")]
    pub used_in_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_opened_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_starred: bool,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_pinned: bool,
}

/// Usage contexts keyed by idea id
pub type UsageMap = HashMap<String, UsageContext>;

impl UsageContext {
    /// Normalize an untrusted count: non-finite or negative becomes 0, fractions are floored
    pub fn from_raw_count(raw: f64) -> u32 {
        if !raw.is_finite() || raw <= 0.0 {
            0
        } else if raw >= u32::MAX as f64 {
            u32::MAX
        } else {
            raw.floor() as u32
        }
    }

    pub fn with_used_in(mut self, count: u32) -> Self {
        self.used_in_count = count;
        self
    }

    pub fn with_last_opened(mut self, at: DateTime<Utc>) -> Self {
        self.last_opened_at = Some(at);
        self
    }

    pub fn starred(mut self) -> Self {
        self.is_starred = true;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.is_pinned = true;
        self
    }
}

/// Look up the usage for an idea, falling back to an empty context
pub fn usage_for<'a>(usage: &'a UsageMap, id: &str) -> &'a UsageContext {
    static EMPTY: std::sync::OnceLock<UsageContext> = std::sync::OnceLock::new();
    usage
        .get(id)
        .unwrap_or_else(|| EMPTY.get_or_init(UsageContext::default))
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw.map(UsageContext::from_raw_count).unwrap_or(0))
}

fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<bool> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or(false))
}
