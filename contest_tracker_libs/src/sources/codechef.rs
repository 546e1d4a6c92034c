use super::{ContestSource, FetchError};
use crate::types::{span_minutes, ContestCandidate, Platform};
use async_trait::async_trait;
use chrono::{Duration, Utc};

const CONTESTS_URL: &str = "https://www.codechef.com/contests";

/// Codechef publishes no machine-readable contest list, so this source is a
/// placeholder standing in for a real scraper. It satisfies the same contract
/// as the other sources and can be swapped out without touching the sync
/// pipeline.
#[derive(Debug, Default)]
pub struct CodechefSource;

impl CodechefSource {
    pub fn new() -> Self {
        CodechefSource
    }
}

#[async_trait]
impl ContestSource for CodechefSource {
    fn platform(&self) -> Platform {
        Platform::Codechef
    }

    async fn fetch(&self) -> Result<Vec<ContestCandidate>, FetchError> {
        let now = Utc::now();

        let long_start = now + Duration::days(1);
        let long_end = long_start + Duration::days(10);
        let cook_start = now + Duration::days(2);
        let cook_end = cook_start + Duration::hours(3);

        Ok(vec![
            ContestCandidate {
                platform: Platform::Codechef,
                name: String::from("Long Challenge"),
                url: String::from(CONTESTS_URL),
                start_time: long_start,
                end_time: long_end,
                duration_minutes: span_minutes(long_start, long_end),
            },
            ContestCandidate {
                platform: Platform::Codechef,
                name: String::from("Cook-Off"),
                url: String::from(CONTESTS_URL),
                start_time: cook_start,
                end_time: cook_end,
                duration_minutes: span_minutes(cook_start, cook_end),
            },
        ])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn placeholder_contests_are_upcoming_and_consistent() {
        let source = CodechefSource::new();
        let contests = source.fetch().await.unwrap();

        assert_eq!(contests.len(), 2);
        let now = Utc::now();
        for contest in &contests {
            assert_eq!(contest.platform, Platform::Codechef);
            assert!(contest.start_time > now);
            assert!(contest.end_time >= contest.start_time);
            assert_eq!(
                contest.duration_minutes,
                span_minutes(contest.start_time, contest.end_time)
            );
        }
        assert_eq!(contests[0].name, "Long Challenge");
        assert_eq!(contests[0].duration_minutes, 14400);
        assert_eq!(contests[1].name, "Cook-Off");
        assert_eq!(contests[1].duration_minutes, 180);
    }
}
