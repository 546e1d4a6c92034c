use crate::{
    store::{ContestStore, PersistenceError},
    types::ContestRecord,
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("contest {0} was not found")]
    NotFound(i64),
    #[error("failed to query the contest store")]
    Persistence(#[from] PersistenceError),
}

/// Read path over the persisted contests. Operates on the latest committed
/// state and never interacts with the sync cycle.
pub struct QueryService {
    store: Arc<dyn ContestStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn ContestStore>) -> Self {
        QueryService { store }
    }

    pub async fn list_contests(
        &self,
        bookmarked_only: bool,
    ) -> Result<Vec<ContestRecord>, QueryError> {
        Ok(self.store.list(bookmarked_only).await?)
    }

    pub async fn toggle_bookmark(&self, id: i64) -> Result<ContestRecord, QueryError> {
        self.store
            .toggle_bookmark(id)
            .await?
            .ok_or(QueryError::NotFound(id))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        store::memory::MemoryContestStore,
        types::{NewContest, Platform},
    };
    use chrono::{TimeZone, Utc};

    fn new_contest(name: &str, start_epoch: i64, bookmarked: bool) -> NewContest {
        let start_time = Utc.timestamp_opt(start_epoch, 0).unwrap();
        NewContest {
            platform: Platform::Codeforces,
            name: String::from(name),
            url: String::from("https://example.com"),
            start_time,
            end_time: start_time + chrono::Duration::hours(2),
            duration_minutes: 120,
            bookmarked,
        }
    }

    async fn seeded_store() -> Arc<MemoryContestStore> {
        let store = Arc::new(MemoryContestStore::new());
        store
            .replace_platform(
                Platform::Codeforces,
                vec![
                    new_contest("Round 952", 1_900_200_000, false),
                    new_contest("Round 950", 1_900_000_000, true),
                    new_contest("Round 951", 1_900_100_000, false),
                ],
            )
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn listing_is_ordered_by_start_time() {
        let queries = QueryService::new(seeded_store().await);

        let contests = queries.list_contests(false).await.unwrap();

        let names: Vec<&str> = contests.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Round 950", "Round 951", "Round 952"]);
        assert!(contests
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time));
    }

    #[tokio::test]
    async fn bookmarked_only_narrows_the_listing() {
        let queries = QueryService::new(seeded_store().await);

        let contests = queries.list_contests(true).await.unwrap();

        assert_eq!(contests.len(), 1);
        assert_eq!(contests[0].name, "Round 950");
    }

    #[tokio::test]
    async fn toggle_flips_and_returns_the_updated_record() {
        let queries = QueryService::new(seeded_store().await);
        let target = queries
            .list_contests(false)
            .await
            .unwrap()
            .into_iter()
            .find(|record| record.name == "Round 951")
            .unwrap();

        let updated = queries.toggle_bookmark(target.id).await.unwrap();

        assert!(updated.bookmarked);
        assert_eq!(updated.id, target.id);
        assert_eq!(queries.list_contests(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn toggle_on_unknown_identity_is_not_found_and_changes_nothing() {
        let queries = QueryService::new(seeded_store().await);
        let before = queries.list_contests(false).await.unwrap();

        let outcome = queries.toggle_bookmark(9999).await;

        assert!(matches!(outcome, Err(QueryError::NotFound(9999))));
        assert_eq!(queries.list_contests(false).await.unwrap(), before);
    }

    #[tokio::test]
    async fn storage_failure_is_distinct_from_not_found() {
        let store = seeded_store().await;
        let queries = QueryService::new(store.clone());
        store.set_failing(true);

        assert!(matches!(
            queries.toggle_bookmark(1).await,
            Err(QueryError::Persistence(_))
        ));
        assert!(matches!(
            queries.list_contests(false).await,
            Err(QueryError::Persistence(_))
        ));
    }
}
