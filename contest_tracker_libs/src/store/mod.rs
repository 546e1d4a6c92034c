pub mod memory;
pub mod postgres;

use crate::types::{ContestRecord, NewContest, Platform};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage operation failed")]
    Database(#[from] sqlx::Error),
    #[error("storage is unavailable")]
    Unavailable,
}

/// Persistence gateway for contest records. Constructed once at process
/// start and passed in explicitly; nothing in the engine reaches for ambient
/// connection state.
#[async_trait]
pub trait ContestStore: Send + Sync + 'static {
    async fn ping(&self) -> Result<(), PersistenceError>;

    /// All records, ascending by start time. `bookmarked_only` narrows the
    /// result to bookmarked records.
    async fn list(&self, bookmarked_only: bool) -> Result<Vec<ContestRecord>, PersistenceError>;

    /// Records of exactly one platform.
    async fn find_by_platform(
        &self,
        platform: Platform,
    ) -> Result<Vec<ContestRecord>, PersistenceError>;

    /// Replaces the platform's records with `contests` in one transaction and
    /// returns the number of records committed. Records of other platforms
    /// are never touched.
    async fn replace_platform(
        &self,
        platform: Platform,
        contests: Vec<NewContest>,
    ) -> Result<u64, PersistenceError>;

    /// Flips the bookmark on a single record. Returns `None` when no record
    /// has that identity.
    async fn toggle_bookmark(&self, id: i64)
        -> Result<Option<ContestRecord>, PersistenceError>;
}
