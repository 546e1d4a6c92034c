use chrono::{DateTime, Utc};
use contest_tracker_libs::{timeview, types::ContestRecord};
use serde::Serialize;

/// One contest as the frontend table consumes it: the persisted fields plus
/// the derived countdown and humanized duration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub id: i64,
    pub platform: String,
    pub name: String,
    pub url: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub duration: String,
    pub time_remaining: String,
    pub bookmarked: bool,
}

impl ContestResponse {
    pub fn from_record(record: ContestRecord, now: DateTime<Utc>) -> Self {
        ContestResponse {
            id: record.id,
            platform: record.platform.to_string(),
            name: record.name,
            url: record.url,
            start_time: record.start_time,
            end_time: record.end_time,
            duration_minutes: record.duration_minutes,
            duration: timeview::format_duration(record.duration_minutes),
            time_remaining: timeview::time_remaining(record.start_time, now),
            bookmarked: record.bookmarked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SyncResultResponse {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl ToString) -> Self {
        ErrorResponse {
            message: message.to_string(),
        }
    }
}
