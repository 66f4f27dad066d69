use chrono::{DateTime, NaiveDate, NaiveDateTime};

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let digits = number.unsigned_abs().to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3 + 1);

    if number < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// "M:SS" with unpadded minutes, e.g. `125.0` -> `2:05`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Inverse of [`format_duration`]; also accepts "H:MM:SS", "125" and "125s".
pub fn parse_duration(text: &str) -> Option<u32> {
    let text = text.trim();
    let text = text.strip_suffix('s').unwrap_or(text);
    if text.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    for part in text.split(':') {
        let value: u32 = part.trim().parse().ok()?;
        total = total.checked_mul(60)?.checked_add(value)?;
    }
    Some(total)
}

pub fn format_date(iso_date: &str) -> String {
    parse_date(iso_date)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| iso_date.to_string())
}

pub fn parse_date(iso_date: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(iso_date) {
        return Some(datetime.date_naive());
    }
    NaiveDate::parse_from_str(iso_date, "%Y-%m-%d").ok()
}

/// Full publish instant in UTC; a bare date counts as midnight.
pub fn parse_timestamp(iso_date: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(iso_date) {
        return Some(datetime.naive_utc());
    }
    NaiveDate::parse_from_str(iso_date, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchQuality {
    Excellent,
    Good,
    NeedsImprovement,
}

impl WatchQuality {
    pub fn css_class(&self) -> &'static str {
        match self {
            WatchQuality::Excellent => "text-blue-600 font-bold",
            WatchQuality::Good => "text-green-600 font-semibold",
            WatchQuality::NeedsImprovement => "text-orange-600 font-semibold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WatchQuality::Excellent => "Excellent",
            WatchQuality::Good => "Good",
            WatchQuality::NeedsImprovement => "Needs improvement",
        }
    }
}

/// (good, excellent) thresholds for a video length in whole seconds.
fn watch_thresholds(length_seconds: u32) -> (f64, f64) {
    match length_seconds {
        0..=9 => (80.0, 100.0),
        10..=19 => (70.0, 90.0),
        20..=39 => (60.0, 80.0),
        40..=59 => (50.0, 70.0),
        60..=180 => (50.0, 70.0),
        181..=300 => (40.0, 60.0),
        301..=600 => (30.0, 50.0),
        601..=900 => (25.0, 45.0),
        _ => (20.0, 40.0),
    }
}

pub fn classify_watch_percent(percent: f64, length_seconds: f64) -> WatchQuality {
    let length = if length_seconds.is_finite() && length_seconds > 0.0 {
        length_seconds.floor() as u32
    } else {
        0
    };
    let (good, excellent) = watch_thresholds(length);
    let percent = percent.clamp(0.0, 100.0);

    if percent >= excellent {
        WatchQuality::Excellent
    } else if percent >= good {
        WatchQuality::Good
    } else {
        WatchQuality::NeedsImprovement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1200), "-1,200");
        assert_eq!(format_number(-12), "-12");
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(59.9), "0:59");
        assert_eq!(format_duration(125.0), "2:05");
        assert_eq!(format_duration(3600.0), "60:00");
        assert_eq!(format_duration(f64::NAN), "--:--");
        assert_eq!(format_duration(-3.0), "--:--");
    }

    #[test]
    fn formatted_duration_parses_back() {
        let formatted = format_duration(125.0);
        assert_eq!(formatted, "2:05");
        assert_eq!(parse_duration(&formatted), Some(125));
        assert_eq!(parse_duration("125s"), Some(125));
        assert_eq!(parse_duration("1:02:03"), Some(3723));
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date("2024-01-05"), "Jan 5, 2024");
        assert_eq!(format_date("2023-11-20T08:15:00Z"), "Nov 20, 2023");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn timestamps_keep_the_time_of_day() {
        let morning = parse_timestamp("2024-01-01T08:00:00Z").unwrap();
        let evening = parse_timestamp("2024-01-01T20:00:00+02:00").unwrap();
        assert!(morning < evening);
        assert_eq!(evening.to_string(), "2024-01-01 18:00:00");
        assert_eq!(
            parse_timestamp("2024-01-01").unwrap().to_string(),
            "2024-01-01 00:00:00"
        );
        assert_eq!(parse_timestamp("soon"), None);
    }

    #[test]
    fn classifies_twenty_to_forty_second_bucket() {
        assert_eq!(classify_watch_percent(59.0, 25.0), WatchQuality::NeedsImprovement);
        assert_eq!(classify_watch_percent(60.0, 25.0), WatchQuality::Good);
        assert_eq!(classify_watch_percent(79.9, 25.0), WatchQuality::Good);
        assert_eq!(classify_watch_percent(80.0, 25.0), WatchQuality::Excellent);
    }

    #[test]
    fn bucket_edges_follow_threshold_table() {
        assert_eq!(classify_watch_percent(99.0, 9.0), WatchQuality::Good);
        assert_eq!(classify_watch_percent(100.0, 9.0), WatchQuality::Excellent);
        assert_eq!(classify_watch_percent(90.0, 10.0), WatchQuality::Excellent);
        assert_eq!(classify_watch_percent(69.0, 180.0), WatchQuality::Good);
        assert_eq!(classify_watch_percent(60.0, 181.0), WatchQuality::Excellent);
        assert_eq!(classify_watch_percent(29.0, 600.0), WatchQuality::NeedsImprovement);
        assert_eq!(classify_watch_percent(45.0, 900.0), WatchQuality::Excellent);
        assert_eq!(classify_watch_percent(40.0, 901.0), WatchQuality::Excellent);
        assert_eq!(classify_watch_percent(19.9, 3600.0), WatchQuality::NeedsImprovement);
    }

    #[test]
    fn out_of_range_percent_is_clamped() {
        assert_eq!(classify_watch_percent(140.0, 5.0), WatchQuality::Excellent);
        assert_eq!(classify_watch_percent(-4.0, 5.0), WatchQuality::NeedsImprovement);
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(45.26), "45.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
