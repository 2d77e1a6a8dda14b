//! Day-keyed cache over a [`KeyValueStore`].
//!
//! Entries are stored as JSON `{ "value": .., "date": "YYYY-MM-DD" }`.

use crate::daily::{color_energy, ColorEnergyOfDay};
use crate::locale::Locale;
use crate::store::{KeyValueStore, StoreError};
use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::Display;
use std::future::Future;

pub const COLOR_ENERGY_KEY: &str = "daily_color_energy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Valid for the calendar day it was written on.
    Daily,
    /// Valid through the Monday-to-Sunday week it was written in.
    Weekly,
}

impl CachePolicy {
    pub fn is_fresh(self, written: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Daily => written == today,
            Self::Weekly => written.iso_week() == today.iso_week(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CachedEntry<T> {
    value: T,
    date: NaiveDate,
}

pub struct DailyCache<S> {
    store: S,
    policy: CachePolicy,
}

impl<S: KeyValueStore> DailyCache<S> {
    pub fn new(store: S, policy: CachePolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<CachedEntry<T>>, StoreError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                log::warn!("Discarding unreadable cache entry '{}': {}", key, e);
                Ok(None)
            }
        }
    }

    /// Cached value under `key` if still fresh for `today`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, today: NaiveDate) -> Result<Option<T>, StoreError> {
        Ok(self
            .load::<T>(key)
            .await?
            .filter(|e| self.policy.is_fresh(e.date, today))
            .map(|e| e.value))
    }

    pub async fn put<T: Serialize>(&self, key: &str, today: NaiveDate, value: &T) -> Result<(), StoreError> {
        let entry = CachedEntry { value, date: today };
        let raw = serde_json::to_string(&entry).map_err(|e| StoreError::Corrupt {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.store.set(key, raw).await
    }

    /// Returns the fresh cached value, or produces, stores and returns a new
    /// one. If the producer fails while a stale value exists, the stale value
    /// is returned instead.
    pub async fn get_or_refresh<T, E, F, Fut>(
        &self,
        key: &str,
        today: NaiveDate,
        producer: F,
    ) -> Result<T, StoreError>
    where
        T: Serialize + DeserializeOwned,
        E: Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let cached = self.load::<T>(key).await?;
        let stale = match cached {
            Some(entry) if self.policy.is_fresh(entry.date, today) => return Ok(entry.value),
            other => other,
        };

        match producer().await {
            Ok(value) => {
                if let Err(e) = self.put(key, today, &value).await {
                    log::warn!("Could not cache '{}': {}", key, e);
                }
                Ok(value)
            }
            Err(e) => match stale {
                Some(entry) => {
                    log::warn!("Refreshing '{}' failed, serving entry from {}: {}", key, entry.date, e);
                    Ok(entry.value)
                }
                None => Err(StoreError::Refresh {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            },
        }
    }
}

/// The day's colour energy, cached for the rest of the day.
pub async fn cached_color_energy<S: KeyValueStore>(
    cache: &DailyCache<S>,
    today: NaiveDate,
    locale: Locale,
) -> Result<ColorEnergyOfDay, StoreError> {
    cache
        .get_or_refresh(COLOR_ENERGY_KEY, today, || async move {
            Ok::<_, Infallible>(color_energy(&today).localized(locale))
        })
        .await
}
