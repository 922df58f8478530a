/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format datetime to DD.MM.YYYY HH:MM
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Format datetime to DD.MM.YYYY
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Value for `<input type="date">`: YYYY-MM-DD
pub fn to_input_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse `<input type="date">` value; empty or invalid -> None
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Date input as the start of the day (UTC)
pub fn input_date_start(raw: &str) -> Option<DateTime<Utc>> {
    parse_input_date(raw)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Date input as the end of the day (UTC); used for coupon end dates
pub fn input_date_end(raw: &str) -> Option<DateTime<Utc>> {
    parse_input_date(raw)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
}

/// Relative label for cards: "today", "in 3 days", "2 days ago"
pub fn relative_days(value: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (value.date_naive() - now.date_naive()).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(Some(dt())), "15.03.2024 14:02");
        assert_eq!(format_datetime(None), "—");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(dt())), "15.03.2024");
        assert_eq!(to_input_date(Some(dt())), "2024-03-15");
        assert_eq!(to_input_date(None), "");
    }

    #[test]
    fn test_input_dates() {
        assert_eq!(input_date_start("2024-03-15").map(|d| d.to_rfc3339()), Some("2024-03-15T00:00:00+00:00".into()));
        assert_eq!(input_date_end("2024-03-15").map(|d| d.to_rfc3339()), Some("2024-03-15T23:59:59+00:00".into()));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15.03.2024"), None);
    }

    #[test]
    fn test_relative_days() {
        let now = dt();
        assert_eq!(relative_days(now, now), "today");
        assert_eq!(relative_days(now + chrono::Duration::days(3), now), "in 3 days");
        assert_eq!(relative_days(now - chrono::Duration::days(2), now), "2 days ago");
    }
}
