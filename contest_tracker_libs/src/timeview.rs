use chrono::{DateTime, Duration, Utc};

/// Countdown until a contest starts, in the `{d}d {h}h {m}m` shape the
/// contest table displays. Contests whose start time has passed render as
/// `Started`.
pub fn time_remaining(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = start - now;
    if diff <= Duration::zero() {
        return String::from("Started");
    }

    let minutes = diff.num_minutes();
    format!(
        "{}d {}h {}m",
        minutes / (60 * 24),
        (minutes / 60) % 24,
        minutes % 60
    )
}

/// Humanized contest duration from the persisted minute count.
pub fn format_duration(minutes: i64) -> String {
    if minutes >= 60 * 24 {
        format!("{}d {}h", minutes / (60 * 24), (minutes % (60 * 24)) / 60)
    } else if minutes >= 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn countdown_breaks_into_days_hours_minutes() {
        let now = Utc.timestamp_opt(1_900_000_000, 0).unwrap();
        let start = now + Duration::days(3) + Duration::hours(4) + Duration::minutes(5);

        assert_eq!(time_remaining(start, now), "3d 4h 5m");
    }

    #[test]
    fn past_and_present_starts_render_as_started() {
        let now = Utc.timestamp_opt(1_900_000_000, 0).unwrap();

        assert_eq!(time_remaining(now, now), "Started");
        assert_eq!(time_remaining(now - Duration::minutes(1), now), "Started");
    }

    #[test]
    fn sub_minute_countdown_rounds_down_to_zero_minutes() {
        let now = Utc.timestamp_opt(1_900_000_000, 0).unwrap();

        assert_eq!(time_remaining(now + Duration::seconds(30), now), "0d 0h 0m");
    }

    #[test]
    fn durations_humanize_by_magnitude() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h 0m");
        assert_eq!(format_duration(180), "3h 0m");
        assert_eq!(format_duration(14400), "10d 0h");
    }
}
