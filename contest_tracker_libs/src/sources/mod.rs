pub mod codechef;
pub mod codeforces;

use crate::types::{ContestCandidate, Platform};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to request the contest listing")]
    Http(#[from] reqwest::Error),
    #[error("failed to deserialize the contest listing")]
    Deserialize(#[from] serde_json::Error),
    #[error("invalid contest listing url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("contest listing endpoint reported an error: {0}")]
    ErrorResponse(String),
    #[error("malformed contest entry: {0}")]
    MalformedEntry(String),
}

/// One external contest platform. `fetch` returns every upcoming contest the
/// platform currently lists, normalized to the canonical candidate shape. An
/// empty list means the platform reported zero upcoming contests; a failed
/// fetch is always an error, never an empty success.
#[async_trait]
pub trait ContestSource: Send + Sync {
    fn platform(&self) -> Platform;

    async fn fetch(&self) -> Result<Vec<ContestCandidate>, FetchError>;
}
