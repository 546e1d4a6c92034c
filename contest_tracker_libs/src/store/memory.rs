use super::{ContestStore, PersistenceError};
use crate::types::{ContestRecord, NewContest, Platform};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory implementation of the contest store. Backs the unit tests and
/// doubles as a storage-free mode; `set_failing` injects persistence faults
/// so error paths can be exercised without a database.
#[derive(Debug, Default)]
pub struct MemoryContestStore {
    contests: RwLock<Vec<ContestRecord>>,
    next_id: AtomicI64,
    failing: AtomicBool,
}

impl MemoryContestStore {
    pub fn new() -> Self {
        MemoryContestStore::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), PersistenceError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(PersistenceError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ContestStore for MemoryContestStore {
    async fn ping(&self) -> Result<(), PersistenceError> {
        self.check_available()
    }

    async fn list(&self, bookmarked_only: bool) -> Result<Vec<ContestRecord>, PersistenceError> {
        self.check_available()?;

        let mut records: Vec<ContestRecord> = self
            .contests
            .read()
            .await
            .iter()
            .filter(|record| !bookmarked_only || record.bookmarked)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.start_time);

        Ok(records)
    }

    async fn find_by_platform(
        &self,
        platform: Platform,
    ) -> Result<Vec<ContestRecord>, PersistenceError> {
        self.check_available()?;

        Ok(self
            .contests
            .read()
            .await
            .iter()
            .filter(|record| record.platform == platform)
            .cloned()
            .collect())
    }

    async fn replace_platform(
        &self,
        platform: Platform,
        contests: Vec<NewContest>,
    ) -> Result<u64, PersistenceError> {
        self.check_available()?;

        let mut records = self.contests.write().await;
        records.retain(|record| record.platform != platform);
        let count = contests.len() as u64;
        for contest in contests {
            records.push(ContestRecord {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                platform: contest.platform,
                name: contest.name,
                url: contest.url,
                start_time: contest.start_time,
                end_time: contest.end_time,
                duration_minutes: contest.duration_minutes,
                bookmarked: contest.bookmarked,
            });
        }

        Ok(count)
    }

    async fn toggle_bookmark(
        &self,
        id: i64,
    ) -> Result<Option<ContestRecord>, PersistenceError> {
        self.check_available()?;

        let mut records = self.contests.write().await;
        match records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.bookmarked = !record.bookmarked;
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn new_contest(platform: Platform, name: &str, start_epoch: i64) -> NewContest {
        let start_time = Utc.timestamp_opt(start_epoch, 0).unwrap();
        NewContest {
            platform,
            name: String::from(name),
            url: String::from("https://example.com"),
            start_time,
            end_time: start_time + chrono::Duration::hours(2),
            duration_minutes: 120,
            bookmarked: false,
        }
    }

    #[tokio::test]
    async fn replace_assigns_fresh_identities_and_keeps_other_platforms() {
        let store = MemoryContestStore::new();

        store
            .replace_platform(
                Platform::Codechef,
                vec![new_contest(Platform::Codechef, "Cook-Off", 1_900_000_000)],
            )
            .await
            .unwrap();
        store
            .replace_platform(
                Platform::Codeforces,
                vec![
                    new_contest(Platform::Codeforces, "Round 950", 1_900_100_000),
                    new_contest(Platform::Codeforces, "Round 951", 1_900_200_000),
                ],
            )
            .await
            .unwrap();

        let all = store.list(false).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Cook-Off");

        let mut ids: Vec<i64> = all.iter().map(|record| record.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn toggle_returns_none_for_unknown_identity() {
        let store = MemoryContestStore::new();

        assert!(store.toggle_bookmark(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn injected_fault_surfaces_as_unavailable() {
        let store = MemoryContestStore::new();
        store.set_failing(true);

        assert!(matches!(
            store.list(false).await,
            Err(PersistenceError::Unavailable)
        ));
        assert!(matches!(
            store.ping().await,
            Err(PersistenceError::Unavailable)
        ));
    }
}
