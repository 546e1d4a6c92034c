use crate::{
    reconcile::reconcile,
    sources::{ContestSource, FetchError},
    store::{ContestStore, PersistenceError},
    types::Platform,
};
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to fetch the contest listing")]
    Fetch(#[from] FetchError),
    #[error("failed to commit the reconciled contests")]
    Persistence(#[from] PersistenceError),
    #[error("no source is registered for platform {0}")]
    UnknownPlatform(Platform),
}

/// Drives the fetch → reconcile → commit cycle, one platform at a time.
/// Platforms are fully independent of each other: a failure on one never
/// touches another's persisted records.
pub struct ContestSyncer {
    store: Arc<dyn ContestStore>,
    sources: HashMap<Platform, Arc<dyn ContestSource>>,
    locks: HashMap<Platform, Mutex<()>>,
}

impl ContestSyncer {
    pub fn new(store: Arc<dyn ContestStore>, sources: Vec<Arc<dyn ContestSource>>) -> Self {
        let sources: HashMap<Platform, Arc<dyn ContestSource>> = sources
            .into_iter()
            .map(|source| (source.platform(), source))
            .collect();
        let locks = sources
            .keys()
            .map(|platform| (*platform, Mutex::new(())))
            .collect();

        ContestSyncer {
            store,
            sources,
            locks,
        }
    }

    /// Registered platforms, in a stable order.
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<Platform> = self.sources.keys().copied().collect();
        platforms.sort_by_key(|platform| platform.as_str());
        platforms
    }

    /// Runs one sync cycle for the platform and returns the number of records
    /// committed. The per-platform mutex keeps the read-then-replace window
    /// atomic against a concurrent sync of the same platform; syncs of
    /// different platforms run freely in parallel. A fetch failure aborts
    /// before persisted state is read or written.
    pub async fn sync_platform(&self, platform: Platform) -> Result<u64, SyncError> {
        let source = self
            .sources
            .get(&platform)
            .ok_or(SyncError::UnknownPlatform(platform))?;
        let lock = self
            .locks
            .get(&platform)
            .ok_or(SyncError::UnknownPlatform(platform))?;
        let _guard = lock.lock().await;

        tracing::info!("Start to sync {} contests.", platform);
        let fresh = source.fetch().await?;
        let existing = self.store.find_by_platform(platform).await?;
        let merged = reconcile(fresh, &existing);
        let count = self.store.replace_platform(platform, merged).await?;
        tracing::info!("{} {} contests successfully synced.", count, platform);

        Ok(count)
    }

    /// Syncs every registered platform in turn. Each platform gets its own
    /// outcome slot; one platform's failure never blocks the rest.
    pub async fn sync_all(&self) -> Vec<(Platform, Result<u64, SyncError>)> {
        let mut outcomes = Vec::new();
        for platform in self.platforms() {
            outcomes.push((platform, self.sync_platform(platform).await));
        }
        outcomes
    }
}
