//! Formatting and display logic
//!
//! Pure functions for turning snapshot fields into display text.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Marker the upstream producer writes in place of a missing value
pub const SENTINEL: &str = "Not found";

/// Shown for value fields that are absent
pub const PLACEHOLDER: &str = "N/A";

/// Shown for an absent snapshot timestamp
pub const NEVER: &str = "Never";

/// Shown in every field after a failed load
pub const ERROR_TEXT: &str = "Error";

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// Collapse the sentinel, empty strings and absence into `None`
///
/// # Examples
/// ```
/// use meterdash::logic::formatting::normalize_field;
///
/// assert_eq!(normalize_field(Some("$12.00")), Some("$12.00".to_string()));
/// assert_eq!(normalize_field(Some("Not found")), None);
/// assert_eq!(normalize_field(Some("")), None);
/// assert_eq!(normalize_field(None), None);
/// ```
pub fn normalize_field(raw: Option<&str>) -> Option<String> {
    match raw {
        None | Some("") | Some(SENTINEL) => None,
        Some(value) => Some(value.to_string()),
    }
}

/// Display text for a value field
pub fn display_value(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

/// Describe how long ago `timestamp` was, relative to `now`
///
/// Elapsed time is measured in whole minutes, rounded down:
/// - under a minute (or in the future): "Just now"
/// - under an hour: "N minute(s) ago"
/// - under a day: "N hour(s) ago"
/// - otherwise: absolute local date and time
///
/// Unparseable timestamps are returned unchanged.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use meterdash::logic::formatting::relative_time;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap();
/// assert_eq!(relative_time(None, now), "Never");
/// assert_eq!(relative_time(Some("2024-03-14T11:59:30Z"), now), "Just now");
/// assert_eq!(relative_time(Some("2024-03-14T11:58:30Z"), now), "1 minute ago");
/// assert_eq!(relative_time(Some("2024-03-14T09:55:00Z"), now), "2 hours ago");
/// ```
pub fn relative_time(timestamp: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = timestamp else {
        return NEVER.to_string();
    };

    let Some(instant) = parse_timestamp(raw) else {
        return raw.to_string();
    };

    let minutes = (now - instant).num_milliseconds().div_euclid(60_000);

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < MINUTES_PER_HOUR {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if minutes < MINUTES_PER_DAY {
        let hours = minutes / MINUTES_PER_HOUR;
        format!("{} hour{} ago", hours, plural(hours))
    } else {
        format_absolute(instant)
    }
}

fn plural(count: i64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

/// Parse an ISO-8601 timestamp
///
/// Offsets (`Z`, `+02:00`) are honoured, naive date-times are local time and
/// bare dates are midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Local date and time, e.g. "3/14/2024 9:26:53 AM"
pub fn format_absolute(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%-m/%-d/%Y %-I:%M:%S %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        (now() - delta).to_rfc3339()
    }

    #[test]
    fn test_normalize_field() {
        assert_eq!(normalize_field(Some("Not found")), None);
        assert_eq!(normalize_field(Some("")), None);
        assert_eq!(normalize_field(None), None);
        // Only the exact sentinel is special
        assert_eq!(normalize_field(Some("not found")), Some("not found".to_string()));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(None), "N/A");
        assert_eq!(display_value(Some("42")), "42");
    }

    #[test]
    fn test_relative_time_never() {
        assert_eq!(relative_time(None, now()), "Never");
    }

    #[test]
    fn test_relative_time_just_now() {
        assert_eq!(relative_time(Some(&ago(Duration::seconds(0))), now()), "Just now");
        assert_eq!(relative_time(Some(&ago(Duration::seconds(59))), now()), "Just now");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        assert_eq!(relative_time(Some(&ago(Duration::minutes(-10))), now()), "Just now");
    }

    #[test]
    fn test_relative_time_minutes() {
        assert_eq!(relative_time(Some(&ago(Duration::seconds(90))), now()), "1 minute ago");
        assert_eq!(relative_time(Some(&ago(Duration::minutes(2))), now()), "2 minutes ago");
        assert_eq!(relative_time(Some(&ago(Duration::seconds(3599))), now()), "59 minutes ago");
    }

    #[test]
    fn test_relative_time_hours() {
        assert_eq!(relative_time(Some(&ago(Duration::minutes(60))), now()), "1 hour ago");
        assert_eq!(relative_time(Some(&ago(Duration::minutes(125))), now()), "2 hours ago");
        assert_eq!(relative_time(Some(&ago(Duration::minutes(1439))), now()), "23 hours ago");
    }

    #[test]
    fn test_relative_time_days_is_absolute() {
        let text = relative_time(Some(&ago(Duration::days(2))), now());
        // Date component and time component
        assert!(text.contains('/'), "missing date in {text}");
        assert!(text.contains(':'), "missing time in {text}");
        assert!(text.contains("2024"));
        assert_eq!(text, format_absolute(now() - Duration::days(2)));
    }

    #[test]
    fn test_relative_time_unparseable_is_verbatim() {
        assert_eq!(relative_time(Some("yesterday-ish"), now()), "yesterday-ish");
    }

    #[test]
    fn test_parse_timestamp_offsets() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-14T10:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-14T12:00:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-03-14T10:00:00.250Z").map(|t| t.timestamp()), Some(expected.timestamp()));
    }

    #[test]
    fn test_parse_timestamp_naive_is_local() {
        let parsed = parse_timestamp("2024-03-14T10:00:00").unwrap();
        let local = parsed.with_timezone(&Local);
        assert_eq!(local.format("%H:%M").to_string(), "10:00");
    }

    #[test]
    fn test_parse_timestamp_date_only() {
        let parsed = parse_timestamp("2024-03-14").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 14, 0, 0, 0).unwrap());
    }
}
