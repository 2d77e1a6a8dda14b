//! Durable key-value storage seam and the day-keyed cache built on it.

pub mod cache;
pub mod counter;
pub mod memory;
pub mod usage;

use async_trait::async_trait;
use thiserror::Error;

pub use cache::{cached_color_energy, CachePolicy, DailyCache, COLOR_ENERGY_KEY};
pub use counter::{count_install_once, reset_all, UsageCounter, INSTALL_MARKER_KEY};
pub use memory::MemoryStore;
pub use usage::{UsageCheck, UsageLimit, COLOR_TEST_LIMIT, COMPATIBILITY_LIMIT};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store backend failed: {0}")]
    Backend(String),
    #[error("Corrupt entry under '{key}': {message}")]
    Corrupt { key: String, message: String },
    #[error("Refreshing '{key}' failed: {message}")]
    Refresh { key: String, message: String },
}

/// String-to-string persistent store owned by the host application.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}
