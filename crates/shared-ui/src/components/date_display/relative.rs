//! English "time ago" phrasing.
//!
//! Every unit is rounded from the total distance, so 89 seconds is "a minute"
//! but 90 seconds rounds up to 2 minutes, and 1h29m30s is still "an hour".

use chrono::{DateTime, TimeZone, Utc};

const DAYS_PER_MONTH: f64 = 30.436875;
const DAYS_PER_YEAR: f64 = 365.2425;

/// Phrase the distance from `now` to `instant`, e.g. "3 hours ago" or "in 2 days".
pub fn humanize<Tz: TimeZone>(instant: &DateTime<Tz>, now: DateTime<Utc>) -> String {
    let delta = instant.clone().signed_duration_since(now);
    let phrase = phrase(delta.num_milliseconds().unsigned_abs());

    if delta.num_milliseconds() > 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// Unsigned phrase for a distance in milliseconds, without "ago" or "in".
pub fn phrase(elapsed_ms: u64) -> String {
    let ms = elapsed_ms as f64;
    let seconds = (ms / 1000.0).round();
    let minutes = (ms / 60_000.0).round();
    let hours = (ms / 3_600_000.0).round();
    let exact_days = ms / 86_400_000.0;
    let days = exact_days.round();
    let months = (exact_days / DAYS_PER_MONTH).round();
    let years = (exact_days / DAYS_PER_YEAR).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
