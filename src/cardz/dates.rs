//! Date parsing, formatting, and expiration classification.
//!
//! Expiration dates arrive in two shapes: `DD-MM-YYYY` from typed input and
//! stored legacy values, and ISO-8601 from date pickers. Every function here
//! branches on the shape first and only then compares, because naive instant
//! subtraction across the two shapes is off by a day near local midnight.
//!
//! The rules, per shape:
//!
//! - `DD-MM-YYYY` is a **local calendar day**. Comparisons happen at day
//!   granularity against today's local date.
//! - ISO input with an explicit UTC marker (a `T` and a trailing `Z`)
//!   compares at **UTC day boundaries**, so a card saved from a picker does
//!   not flip expiry state when the device changes timezone.
//! - Anything else `interpret` can make sense of is kept as a raw instant
//!   and compared against the current instant. This branch intentionally
//!   skips day normalization; stored data has relied on the behavior and it
//!   must not be unified with the others without a data migration.
//!
//! Invalid input never panics: predicates return `false`, formatters return
//! `"Invalid Date"` or an empty string, and day counts return 0.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Cards within this many days of expiry count as "expiring soon".
pub const DEFAULT_EXPIRY_WINDOW_DAYS: i64 = 30;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// How a raw date string was understood.
enum Interpreted {
    /// `DD-MM-YYYY`: a local calendar day with no time component.
    CalendarDay(NaiveDate),
    /// ISO-8601 carrying both a time separator and a `Z` suffix.
    UtcMarked(DateTime<Utc>),
    /// Any other parseable form, kept as a plain instant.
    Instant(DateTime<Utc>),
}

/// Strict `DD-MM-YYYY` shape check: two digits, dash, two digits, dash,
/// four digits. Used only to pick the parsing branch;
/// [`parse_date_dd_mm_yyyy`] itself is more forgiving about padding.
fn is_dd_mm_yyyy(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn interpret(input: &str) -> Option<Interpreted> {
    if is_dd_mm_yyyy(input) {
        return parse_date_dd_mm_yyyy(input).map(Interpreted::CalendarDay);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        let utc = dt.with_timezone(&Utc);
        if input.contains('T') && input.ends_with('Z') {
            return Some(Interpreted::UtcMarked(utc));
        }
        return Some(Interpreted::Instant(utc));
    }

    // Date-only ISO reads as midnight UTC.
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(Interpreted::Instant(
            Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
        ));
    }

    // Timestamps without an offset read in local time.
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| Interpreted::Instant(local.with_timezone(&Utc)));
        }
    }

    None
}

/// Parse a `DD-MM-YYYY` string into a calendar date.
///
/// Splits on `-` and requires exactly three numeric parts. Calendar-invalid
/// combinations (day 30 of February, month 13) come back `None`.
pub fn parse_date_dd_mm_yyyy(input: &str) -> Option<NaiveDate> {
    if input.is_empty() {
        return None;
    }

    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].parse().ok()?;
    let month: u32 = parts[1].parse().ok()?;
    let year: i32 = parts[2].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date for display, e.g. `"Dec 31, 2024"`.
///
/// Empty input yields an empty string; unparseable input yields the literal
/// `"Invalid Date"`. UTC-marked input renders with UTC calendar fields so
/// picker-saved dates never drift a day under a local-timezone render.
pub fn format_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    match interpret(input) {
        Some(Interpreted::CalendarDay(date)) => format_display(date),
        Some(Interpreted::UtcMarked(instant)) => format_display(instant.date_naive()),
        Some(Interpreted::Instant(instant)) => {
            format_display(instant.with_timezone(&Local).date_naive())
        }
        None => "Invalid Date".to_string(),
    }
}

fn format_display(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Render any parseable date string as zero-padded `DD-MM-YYYY`, using local
/// calendar fields. Unparseable input yields an empty string.
pub fn format_date_dd_mm_yyyy(input: &str) -> String {
    match interpret(input) {
        Some(Interpreted::CalendarDay(date)) => date.format("%d-%m-%Y").to_string(),
        Some(Interpreted::UtcMarked(instant)) | Some(Interpreted::Instant(instant)) => instant
            .with_timezone(&Local)
            .format("%d-%m-%Y")
            .to_string(),
        None => String::new(),
    }
}

/// Whether the expiration date has passed. Today itself is not expired for
/// day-granularity shapes. Invalid input is never expired.
pub fn is_expired(input: &str) -> bool {
    is_expired_at(input, Utc::now())
}

fn is_expired_at(input: &str, now: DateTime<Utc>) -> bool {
    match interpret(input) {
        Some(Interpreted::CalendarDay(date)) => date < now.with_timezone(&Local).date_naive(),
        Some(Interpreted::UtcMarked(instant)) => instant.date_naive() < now.date_naive(),
        Some(Interpreted::Instant(instant)) => instant < now,
        None => false,
    }
}

/// Whether the expiration date falls within the default 30-day window:
/// strictly after today, up to and including the window boundary. Today
/// itself is "expired", never "expiring soon".
pub fn is_expiring_soon(input: &str) -> bool {
    is_expiring_soon_within(input, DEFAULT_EXPIRY_WINDOW_DAYS)
}

/// [`is_expiring_soon`] with a caller-chosen day threshold.
pub fn is_expiring_soon_within(input: &str, days_threshold: i64) -> bool {
    is_expiring_soon_at(input, days_threshold, Utc::now())
}

fn is_expiring_soon_at(input: &str, days_threshold: i64, now: DateTime<Utc>) -> bool {
    let window = Duration::days(days_threshold);
    match interpret(input) {
        Some(Interpreted::CalendarDay(date)) => {
            let today = now.with_timezone(&Local).date_naive();
            date > today && date <= today + window
        }
        Some(Interpreted::UtcMarked(instant)) => {
            let today = now.date_naive();
            let day = instant.date_naive();
            day > today && day <= today + window
        }
        Some(Interpreted::Instant(instant)) => instant > now && instant <= now + window,
        None => false,
    }
}

/// Signed day count until the expiration date: the ceiling of the elapsed
/// time over a day, so a card expiring later today or tomorrow reads 1 for
/// instant shapes, and negative once expired. Empty or invalid input reads 0.
pub fn days_until_expiration(input: &str) -> i64 {
    days_until_expiration_at(input, Utc::now())
}

fn days_until_expiration_at(input: &str, now: DateTime<Utc>) -> i64 {
    match interpret(input) {
        Some(Interpreted::CalendarDay(date)) => {
            (date - now.with_timezone(&Local).date_naive()).num_days()
        }
        Some(Interpreted::UtcMarked(instant)) | Some(Interpreted::Instant(instant)) => {
            let millis = (instant - now).num_milliseconds() as f64;
            (millis / MILLIS_PER_DAY).ceil() as i64
        }
        None => 0,
    }
}
