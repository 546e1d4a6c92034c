use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Contest platforms the tracker knows how to sync. Adding a platform means
/// adding a variant here plus a `ContestSource` implementation for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Codeforces,
    Codechef,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Codeforces => "Codeforces",
            Platform::Codechef => "Codechef",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatformError(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "codeforces" => Ok(Platform::Codeforces),
            "codechef" => Ok(Platform::Codechef),
            _ => Err(UnknownPlatformError(String::from(s))),
        }
    }
}

/// A contest as reported by a platform source. Carries no storage identity
/// and no bookmark flag; sources never know persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestCandidate {
    pub platform: Platform,
    pub name: String,
    pub url: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
}

impl ContestCandidate {
    /// Attaches the reconciled bookmark flag, producing the unit the store
    /// persists.
    pub fn into_new(self, bookmarked: bool) -> NewContest {
        NewContest {
            platform: self.platform,
            name: self.name,
            url: self.url,
            start_time: self.start_time,
            end_time: self.end_time,
            duration_minutes: self.duration_minutes,
            bookmarked,
        }
    }
}

/// A reconciled contest ready to be committed. Not yet assigned an identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewContest {
    pub platform: Platform,
    pub name: String,
    pub url: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub bookmarked: bool,
}

/// A persisted contest. `id` is the storage-assigned identity, distinct from
/// any platform-native contest id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestRecord {
    pub id: i64,
    pub platform: Platform,
    pub name: String,
    pub url: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub bookmarked: bool,
}

/// Whole minutes between two instants, rounded to the nearest minute.
pub fn span_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    ((end - start).num_seconds() + 30) / 60
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn platform_round_trips_through_str() {
        assert_eq!(Platform::from_str("codeforces").unwrap(), Platform::Codeforces);
        assert_eq!(Platform::from_str("Codechef").unwrap(), Platform::Codechef);
        assert_eq!(Platform::Codeforces.to_string(), "Codeforces");
        assert!(Platform::from_str("topcoder").is_err());
    }

    #[test]
    fn span_minutes_rounds_to_nearest_minute() {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        assert_eq!(span_minutes(start, start + chrono::Duration::seconds(7200)), 120);
        assert_eq!(span_minutes(start, start + chrono::Duration::seconds(90)), 2);
        assert_eq!(span_minutes(start, start), 0);
    }
}
