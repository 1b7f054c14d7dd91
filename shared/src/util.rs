use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Parse a server date string into a calendar date.
///
/// Accepts RFC 3339 timestamps (converted to local time, like [`today`]),
/// naive `YYYY-MM-DDTHH:MM:SS[.f]` and plain `YYYY-MM-DD`. Returns `None`
/// for missing, empty or malformed input.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_date(rfc3339: &str) -> NaiveDate {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Local)
            .date_naive()
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(parse_date(Some("2026-10-19")), Some(expected));
        assert_eq!(parse_date(Some("2026-10-19T08:15:00.5")), Some(expected));
        assert_eq!(
            parse_date(Some("2026-10-19T08:15:00Z")),
            Some(local_date("2026-10-19T08:15:00Z"))
        );
    }

    #[test]
    fn test_parse_date_uses_local_calendar_day() {
        use chrono::{TimeZone, Utc};

        // 04:30 UTC on the 20th, whatever the local zone makes of it
        let raw = "2026-10-19T23:30:00-05:00";
        let instant = Utc.with_ymd_and_hms(2026, 10, 20, 4, 30, 0).unwrap();
        assert_eq!(
            parse_date(Some(raw)),
            Some(instant.with_timezone(&Local).date_naive())
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(None), None);
        assert_eq!(parse_date(Some("")), None);
        assert_eq!(parse_date(Some("not a date")), None);
        assert_eq!(parse_date(Some("2026-13-40")), None);
    }
}
