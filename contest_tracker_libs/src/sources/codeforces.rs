use super::{ContestSource, FetchError};
use crate::types::{ContestCandidate, Platform};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::time::Duration;

#[derive(Debug, Deserialize)]
struct ContestListEnvelope {
    status: String,
    comment: Option<String>,
    #[serde(default)]
    result: Vec<RawContest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContest {
    id: i64,
    name: String,
    phase: String,
    duration_seconds: i64,
    start_time_seconds: Option<i64>,
}

pub struct CodeforcesSource {
    url: Url,
    client: Client,
}

impl CodeforcesSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let url = Url::parse(&format!("{}/contest.list", base_url.trim_end_matches('/')))?;
        let client = Client::builder().gzip(true).timeout(timeout).build()?;

        Ok(CodeforcesSource { url, client })
    }
}

#[async_trait]
impl ContestSource for CodeforcesSource {
    fn platform(&self) -> Platform {
        Platform::Codeforces
    }

    /// Retrieves the full contest list from the Codeforces API and keeps the
    /// contests that have not started yet.
    async fn fetch(&self) -> Result<Vec<ContestCandidate>, FetchError> {
        tracing::info!("Start to retrieve the contest list from Codeforces.");
        let res = self.client.get(self.url.clone()).send().await?;

        if let Err(e) = res.error_for_status_ref() {
            tracing::error!(
                "error response returned from the Codeforces contest list endpoint: {:?}",
                e
            );
            return Err(FetchError::Http(e));
        }

        let body = res.text().await?;
        let upcoming = parse_upcoming(&body)?;
        tracing::info!("{} upcoming Codeforces contests retrieved.", upcoming.len());

        Ok(upcoming)
    }
}

/// Translates the raw Codeforces payload into canonical candidates. The API
/// wraps its result in an envelope whose `status` field signals API-level
/// failures even when the HTTP response is a 200.
fn parse_upcoming(body: &str) -> Result<Vec<ContestCandidate>, FetchError> {
    let envelope: ContestListEnvelope = serde_json::from_str(body)?;

    if envelope.status != "OK" {
        return Err(FetchError::ErrorResponse(
            envelope
                .comment
                .unwrap_or_else(|| String::from("status was not OK")),
        ));
    }

    let mut contests = Vec::new();
    for raw in envelope
        .result
        .into_iter()
        .filter(|contest| contest.phase == "BEFORE")
    {
        let start_epoch = raw.start_time_seconds.ok_or_else(|| {
            FetchError::MalformedEntry(format!("contest {} has no start time", raw.id))
        })?;
        let start_time = Utc.timestamp_opt(start_epoch, 0).single().ok_or_else(|| {
            FetchError::MalformedEntry(format!("contest {} has an out-of-range start time", raw.id))
        })?;
        if raw.duration_seconds < 0 {
            return Err(FetchError::MalformedEntry(format!(
                "contest {} has a negative duration",
                raw.id
            )));
        }

        contests.push(ContestCandidate {
            platform: Platform::Codeforces,
            name: raw.name,
            url: format!("https://codeforces.com/contest/{}", raw.id),
            start_time,
            end_time: start_time + chrono::Duration::seconds(raw.duration_seconds),
            duration_minutes: raw.duration_seconds / 60,
        });
    }

    Ok(contests)
}
