//! Date and time comparison logic
//!
//! The schedule keeps dates and times as the source text ("12/10/2025",
//! "9:00 AM"); these helpers parse them for ordering and for calendar
//! export. Sorting helpers are total: unparseable text collapses to a
//! sentinel minimum instead of failing, so a half-broken spreadsheet row
//! never breaks the table.

use chrono::{Datelike, NaiveDate, Weekday};
use std::cmp::Ordering;

/// Parse a 12-hour clock string into minutes since midnight.
///
/// Accepts "h:mm AM/PM" (with or without the space) and bare "h:mm",
/// which is read as 24-hour text. Returns `None` for anything else.
pub fn parse_minutes(text: &str) -> Option<u32> {
    let cleaned = text.trim().to_uppercase();

    let (clock, meridiem) = if let Some(stripped) = cleaned.strip_suffix("PM") {
        (stripped.trim_end(), Some(true))
    } else if let Some(stripped) = cleaned.strip_suffix("AM") {
        (stripped.trim_end(), Some(false))
    } else {
        (cleaned.as_str(), None)
    };

    let mut parts = clock.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    if minute > 59 {
        return None;
    }

    let hour24 = match meridiem {
        // 12 AM is midnight, 12 PM is noon; other PM hours add twelve
        Some(is_pm) => {
            if hour < 1 || hour > 12 {
                return None;
            }
            let base = hour % 12;
            if is_pm {
                base + 12
            } else {
                base
            }
        }
        // No suffix: treat as 24-hour text
        None => {
            if hour > 23 {
                return None;
            }
            hour
        }
    };

    Some(hour24 * 60 + minute)
}

/// Convert time text to minutes since midnight, total version.
///
/// Malformed text maps to 0 (midnight) so ordering by time never fails.
///
/// # Examples
/// ```
/// use examtui::logic::datetime::time_to_minutes;
///
/// assert_eq!(time_to_minutes("12:00 AM"), 0);
/// assert_eq!(time_to_minutes("12:30 AM"), 30);
/// assert_eq!(time_to_minutes("12:00 PM"), 720);
/// assert_eq!(time_to_minutes("1:00 PM"), 780);
/// assert_eq!(time_to_minutes("TBA"), 0);
/// ```
pub fn time_to_minutes(text: &str) -> u32 {
    parse_minutes(text).unwrap_or(0)
}

/// Parse schedule date text into a calendar date.
///
/// The registrar export uses M/D/YYYY; ISO and long-form dates are
/// accepted for resilience across export revisions.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%m/%d/%y", "%B %d, %Y"];

    let trimmed = text.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Compare two date strings chronologically.
///
/// Lexicographic comparison would misorder single-digit days and months
/// ("9/5/2025" vs "12/10/2025"), so both sides are parsed first.
/// Unparseable dates sort before every real date and equal to each other.
pub fn compare_dates(a: &str, b: &str) -> Ordering {
    // Option ordering puts None (the sentinel minimum) first
    parse_date(a).cmp(&parse_date(b))
}

/// Compare two time strings by minutes since midnight.
pub fn compare_times(a: &str, b: &str) -> Ordering {
    time_to_minutes(a).cmp(&time_to_minutes(b))
}

/// Weekday name for a date string, for rows whose Day cell is blank.
pub fn weekday_name(date_text: &str) -> Option<&'static str> {
    let name = match parse_date(date_text)?.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    };
    Some(name)
}

/// Build a calendar-service local date-time ("2025-12-10T09:00:00") from
/// schedule date and time text.
///
/// Strict, unlike the ordering helpers: export has to report bad rows
/// instead of silently scheduling them at midnight.
pub fn event_datetime(date_text: &str, time_text: &str) -> Option<String> {
    let date = parse_date(date_text)?;
    let minutes = parse_minutes(time_text)?;
    Some(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:00",
        date.year(),
        date.month(),
        date.day(),
        minutes / 60,
        minutes % 60
    ))
}
