//! Date keys for sorting display dates
//!
//! Order dates are display strings: either a relative phrase ("Just now",
//! "5 minutes ago", "Yesterday") or an absolute date ("Feb 2, 2023"). Sorting
//! needs one numeric key for all of them.

use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Key assigned to a date string nothing can parse. Minimal, so invalid
/// dates sort first in ascending order.
pub const UNPARSEABLE_DATE_KEY: i64 = i64::MIN;

/// Sortable millisecond key for a display date, relative to `now`.
pub fn date_sort_key(value: &str, now: DateTime<Utc>) -> i64 {
    let text = value.trim().to_lowercase();

    if text == "just now" {
        return now.timestamp_millis();
    }
    if text == "yesterday" {
        return (now - Duration::days(1)).timestamp_millis();
    }
    if let Some(key) = relative_key(&text, now) {
        return key;
    }
    if let Some(key) = absolute_key(value.trim()) {
        return key;
    }

    UNPARSEABLE_DATE_KEY
}

/// Parse "<n> minute(s)/hour(s)/day(s) ago" (lower-cased input).
/// "a"/"an" count as 1, matching phrases like "A minute ago".
fn relative_key(text: &str, now: DateTime<Utc>) -> Option<i64> {
    let rest = text.strip_suffix(" ago")?;
    let (amount, unit) = rest.split_once(' ')?;

    let n: i64 = match amount {
        "a" | "an" => 1,
        _ => amount.parse().ok()?,
    };

    let offset = match unit.trim().trim_end_matches('s') {
        "minute" => Duration::minutes(n),
        "hour" => Duration::hours(n),
        "day" => Duration::days(n),
        _ => return None,
    };

    Some((now - offset).timestamp_millis())
}

/// Parse an absolute date string ("Feb 2, 2023", "2023-02-02", "02/02/2023"),
/// taken at midnight UTC.
fn absolute_key(text: &str) -> Option<i64> {
    const FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| {
            date.and_hms_opt(0, 0, 0)
                .expect("midnight is always a valid time")
                .and_utc()
                .timestamp_millis()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_phrases_order_newest_first() {
        let keys = [
            date_sort_key("Just now", now()),
            date_sort_key("A minute ago", now()),
            date_sort_key("5 minutes ago", now()),
            date_sort_key("1 hour ago", now()),
            date_sort_key("Yesterday", now()),
            date_sort_key("3 days ago", now()),
        ];
        for pair in keys.windows(2) {
            assert!(pair[0] > pair[1], "expected {} > {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn phrases_are_case_insensitive() {
        assert_eq!(
            date_sort_key("JUST NOW", now()),
            date_sort_key("just now", now())
        );
        assert_eq!(
            date_sort_key("2 Hours Ago", now()),
            date_sort_key("2 hours ago", now())
        );
    }

    #[test]
    fn yesterday_is_exactly_one_day_back() {
        assert_eq!(
            date_sort_key("Yesterday", now()),
            (now() - Duration::days(1)).timestamp_millis()
        );
    }

    #[test]
    fn absolute_dates_parse_in_common_formats() {
        let expected = Utc
            .with_ymd_and_hms(2023, 2, 2, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(date_sort_key("Feb 2, 2023", now()), expected);
        assert_eq!(date_sort_key("February 2, 2023", now()), expected);
        assert_eq!(date_sort_key("2023-02-02", now()), expected);
        assert_eq!(date_sort_key("02/02/2023", now()), expected);
    }

    #[test]
    fn absolute_dates_sort_before_recent_relative_ones() {
        assert!(date_sort_key("Feb 2, 2023", now()) < date_sort_key("Yesterday", now()));
    }

    #[test]
    fn unparseable_input_gets_the_sentinel_minimum() {
        assert_eq!(date_sort_key("not a date", now()), UNPARSEABLE_DATE_KEY);
        assert_eq!(date_sort_key("", now()), UNPARSEABLE_DATE_KEY);
        assert_eq!(date_sort_key("10 fortnights ago", now()), UNPARSEABLE_DATE_KEY);
        assert!(date_sort_key("not a date", now()) < date_sort_key("Feb 2, 2023", now()));
    }
}
