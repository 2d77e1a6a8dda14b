use crate::store::{KeyValueStore, StoreError};
use async_trait::async_trait;

/// Marker key written once the install has been counted.
pub const INSTALL_MARKER_KEY: &str = "app_installed";

/// Remote counter that can only be incremented.
#[async_trait]
pub trait UsageCounter: Send + Sync {
    async fn increment(&self) -> Result<(), StoreError>;
}

/// Counts this install at most once per store.
///
/// Returns true when the counter was incremented by this call. Failures are
/// logged and reported as false; the marker is only written after a
/// successful increment so a later call can retry.
pub async fn count_install_once<S, C>(store: &S, counter: &C) -> bool
where
    S: KeyValueStore + ?Sized,
    C: UsageCounter + ?Sized,
{
    match store.get(INSTALL_MARKER_KEY).await {
        Ok(Some(_)) => return false,
        Ok(None) => {}
        Err(e) => {
            log::info!("Install count skipped: {}", e);
            return false;
        }
    }

    if let Err(e) = counter.increment().await {
        log::info!("Install count failed: {}", e);
        return false;
    }

    if let Err(e) = store.set(INSTALL_MARKER_KEY, "true".to_string()).await {
        log::info!("Install counted but marker not saved: {}", e);
    }
    true
}

/// Removes every stored key.
pub async fn reset_all<S: KeyValueStore + ?Sized>(store: &S) -> Result<(), StoreError> {
    let keys = store.keys().await?;
    store.clear().await?;
    log::debug!("Cleared {} stored keys", keys.len());
    Ok(())
}
