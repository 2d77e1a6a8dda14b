//! Per-day usage limits kept in a [`KeyValueStore`].
//!
//! Each limit stores `{ "date": "YYYY-MM-DD", "count": n }` under its key.
//! The count restarts on a new day.

use crate::store::{KeyValueStore, StoreError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageLimit {
    pub key: &'static str,
    pub per_day: u32,
}

pub const COLOR_TEST_LIMIT: UsageLimit = UsageLimit::new("colortest_daily_usage", 2);
pub const COMPATIBILITY_LIMIT: UsageLimit = UsageLimit::new("compatibility_daily_usage", 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCheck {
    pub can_use: bool,
    pub remaining: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct UsageRecord {
    date: NaiveDate,
    count: u32,
}

impl UsageLimit {
    pub const fn new(key: &'static str, per_day: u32) -> Self {
        Self { key, per_day }
    }

    async fn load<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Option<UsageRecord>, StoreError> {
        let Some(raw) = store.get(self.key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| StoreError::Corrupt {
            key: self.key.to_string(),
            message: e.to_string(),
        })
    }

    /// Whether another use is allowed today. An unreadable record allows
    /// one more use.
    pub async fn check<S: KeyValueStore + ?Sized>(&self, store: &S, today: NaiveDate) -> UsageCheck {
        match self.load(store).await {
            Ok(Some(record)) if record.date == today => {
                let remaining = self.per_day.saturating_sub(record.count);
                UsageCheck {
                    can_use: remaining > 0,
                    remaining,
                }
            }
            Ok(_) => UsageCheck {
                can_use: true,
                remaining: self.per_day,
            },
            Err(e) => {
                log::warn!("Usage limit '{}' unreadable: {}", self.key, e);
                UsageCheck {
                    can_use: true,
                    remaining: 1,
                }
            }
        }
    }

    /// Counts one use for `today` and returns today's total.
    pub async fn record<S: KeyValueStore + ?Sized>(&self, store: &S, today: NaiveDate) -> Result<u32, StoreError> {
        let previous = match self.load(store).await {
            Ok(Some(record)) if record.date == today => record.count,
            Ok(_) => 0,
            Err(StoreError::Corrupt { message, .. }) => {
                log::warn!("Resetting unreadable usage record '{}': {}", self.key, message);
                0
            }
            Err(e) => return Err(e),
        };

        let record = UsageRecord {
            date: today,
            count: previous + 1,
        };
        let raw = serde_json::to_string(&record).map_err(|e| StoreError::Corrupt {
            key: self.key.to_string(),
            message: e.to_string(),
        })?;
        store.set(self.key, raw).await?;
        log::debug!("Usage '{}' at {}/{}", self.key, record.count, self.per_day);
        Ok(record.count)
    }
}
