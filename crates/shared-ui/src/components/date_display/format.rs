use std::fmt;

use chrono::{DateTime, FixedOffset, Locale, NaiveDate, NaiveDateTime, Utc};

use super::config::DateDisplayConfig;
use super::relative;

/// Text shown in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid date";

/// Naive date-time layouts accepted after RFC 3339, read in the display zone.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Absolute renderings a formatter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Calendar date only, e.g. "May 12, 2024".
    Short,
    /// Weekday, date and time of day, e.g. "Sunday, May 12, 2024 8:30 AM".
    Long,
}

impl DateStyle {
    /// strftime pattern for this style in `locale`.
    ///
    /// US English spells the month out; every other locale uses its own date
    /// (`%x`) and time (`%X`) representations.
    pub fn pattern(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (DateStyle::Short, Locale::en_US) => "%b %-d, %Y",
            (DateStyle::Long, Locale::en_US) => "%A, %B %-d, %Y %-I:%M %p",
            (DateStyle::Short, _) => "%x",
            (DateStyle::Long, _) => "%A %x %X",
        }
    }
}

/// A date string no accepted layout could read.
#[derive(Debug, Clone, PartialEq)]
pub struct DateParseError {
    pub input: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised date: {:?}", self.input)
    }
}

impl std::error::Error for DateParseError {}

/// Something that can read a date string and render it for display.
pub trait DateFormatter {
    fn parse(&self, input: &str) -> Result<DateTime<FixedOffset>, DateParseError>;

    fn format(&self, instant: &DateTime<FixedOffset>, style: DateStyle) -> String;

    /// Phrase `instant` relative to `now`, e.g. "3 hours ago".
    fn relative(&self, instant: &DateTime<FixedOffset>, now: DateTime<Utc>) -> String;

    fn invalid_date(&self) -> &str {
        INVALID_DATE
    }
}

/// [`DateFormatter`] backed by chrono, rendering in a configured locale and zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChronoFormatter {
    config: DateDisplayConfig,
}

impl ChronoFormatter {
    pub fn new(config: DateDisplayConfig) -> Self {
        Self { config }
    }
}

impl DateFormatter for ChronoFormatter {
    /// Accepts RFC 3339, naive date-times and bare dates.
    ///
    /// Inputs without an offset are read in the display zone; bare dates
    /// resolve to midnight.
    fn parse(&self, input: &str) -> Result<DateTime<FixedOffset>, DateParseError> {
        let trimmed = input.trim();

        if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(instant);
        }

        let naive = NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            });

        naive
            .and_then(|naive| self.config.zone.from_wall_clock(naive))
            .ok_or_else(|| DateParseError {
                input: input.to_string(),
            })
    }

    fn format(&self, instant: &DateTime<FixedOffset>, style: DateStyle) -> String {
        let locale = self.config.locale;
        self.config
            .zone
            .to_display(instant)
            .format_localized(style.pattern(locale), locale)
            .to_string()
    }

    fn relative(&self, instant: &DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
        relative::humanize(instant, now)
    }
}
