use std::fmt;

use chrono::{DateTime, FixedOffset, Local, Locale, NaiveDateTime, Offset, TimeZone, Utc};

/// Where wall-clock times are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// The host's (or browser's) local time zone, daylight saving included.
    Local,
    /// A constant offset from UTC.
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Re-express `instant` with the offset this zone has at that instant.
    pub fn to_display<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> DateTime<FixedOffset> {
        match self {
            DisplayZone::Local => instant.with_timezone(&Local).fixed_offset(),
            DisplayZone::Fixed(offset) => instant.with_timezone(offset),
        }
    }

    /// Attach this zone to a wall-clock reading.
    ///
    /// Ambiguous local times take the earlier instant; times skipped by a
    /// daylight-saving jump have none.
    pub fn from_wall_clock(&self, naive: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            DisplayZone::Local => Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.fixed_offset()),
            DisplayZone::Fixed(offset) => offset.from_local_datetime(&naive).single(),
        }
    }
}

/// Locale and time zone used when rendering dates.
///
/// Provide one with `use_context_provider` near the root; [`DateDisplay`](super::DateDisplay)
/// falls back to [`DateDisplayConfig::default`] when no context exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateDisplayConfig {
    pub locale: Locale,
    pub zone: DisplayZone,
}

impl Default for DateDisplayConfig {
    /// US English in the host's local time zone.
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            zone: DisplayZone::Local,
        }
    }
}

impl DateDisplayConfig {
    pub fn new(locale: Locale, zone: DisplayZone) -> Self {
        Self { locale, zone }
    }

    /// US English at UTC. Deterministic regardless of the host clock's zone.
    pub fn utc() -> Self {
        Self::new(Locale::en_US, DisplayZone::Fixed(Utc.fix()))
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// Pin display to a constant offset instead of the local zone.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            zone: DisplayZone::Fixed(offset),
            ..self
        }
    }
}

/// A configuration value that could not be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownLocale(String),
    InvalidOffset(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownLocale(raw) => write!(f, "unknown locale {raw:?}"),
            ConfigError::InvalidOffset(raw) => {
                write!(f, "invalid UTC offset {raw:?} (expected minutes east of UTC)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a POSIX locale name such as `fr_FR`. A `-` separator is also accepted.
pub fn parse_locale(raw: &str) -> Result<Locale, ConfigError> {
    let name = raw.trim().replace('-', "_");
    Locale::try_from(name.as_str()).map_err(|_| ConfigError::UnknownLocale(raw.to_string()))
}

/// Parse a signed count of minutes east of UTC, e.g. `-300` for UTC-05:00.
pub fn parse_offset_minutes(raw: &str) -> Result<FixedOffset, ConfigError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|minutes| minutes.checked_mul(60))
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| ConfigError::InvalidOffset(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_config_is_english_at_zero_offset() {
        let config = DateDisplayConfig::utc();
        assert_eq!(config.locale, Locale::en_US);
        assert_eq!(config.zone, DisplayZone::Fixed(Utc.fix()));
    }

    #[test]
    fn default_is_us_english_in_local_zone() {
        let config = DateDisplayConfig::default();
        assert_eq!(config.locale, Locale::en_US);
        assert_eq!(config.zone, DisplayZone::Local);
    }

    #[test]
    fn builders_replace_one_field() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let config = DateDisplayConfig::default()
            .with_locale(Locale::de_DE)
            .with_offset(offset);
        assert_eq!(
            config,
            DateDisplayConfig::new(Locale::de_DE, DisplayZone::Fixed(offset))
        );
    }

    fn winter_and_summer() -> [DateTime<Utc>; 2] {
        [
            Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 7, 15, 17, 0, 0).unwrap(),
        ]
    }

    #[test]
    fn local_zone_uses_offset_in_effect_at_each_instant() {
        for instant in winter_and_summer() {
            let shown = DisplayZone::Local.to_display(&instant);
            let expected = Local.offset_from_utc_datetime(&instant.naive_utc()).fix();
            assert_eq!(*shown.offset(), expected, "{instant}");
            assert_eq!(shown, instant);
        }
    }

    #[test]
    fn local_zone_matches_chrono_local_wall_clock() {
        for instant in winter_and_summer() {
            let shown = DisplayZone::Local.to_display(&instant);
            assert_eq!(shown.naive_local(), instant.with_timezone(&Local).naive_local());
        }
    }

    #[test]
    fn fixed_zone_ignores_season() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let [winter, summer] = winter_and_summer();
        let zone = DisplayZone::Fixed(offset);
        assert_eq!(zone.to_display(&winter).to_rfc3339(), "2024-01-15T12:00:00-05:00");
        assert_eq!(zone.to_display(&summer).to_rfc3339(), "2024-07-15T12:00:00-05:00");
    }

    #[test]
    fn wall_clock_in_fixed_zone() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let naive =
            NaiveDateTime::parse_from_str("2024-05-12 08:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let instant = DisplayZone::Fixed(offset).from_wall_clock(naive).unwrap();
        assert_eq!(instant.to_rfc3339(), "2024-05-12T08:30:00+02:00");
    }

    #[test]
    fn wall_clock_in_local_zone_round_trips() {
        let naive =
            NaiveDateTime::parse_from_str("2024-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let instant = DisplayZone::Local.from_wall_clock(naive).unwrap();
        assert_eq!(DisplayZone::Local.to_display(&instant).naive_local(), naive);
    }

    #[test]
    fn parses_known_locales() {
        assert_eq!(parse_locale("fr_FR"), Ok(Locale::fr_FR));
        assert_eq!(parse_locale(" en-US "), Ok(Locale::en_US));
    }

    #[test]
    fn rejects_unknown_locale() {
        assert_eq!(
            parse_locale("xx_YY"),
            Err(ConfigError::UnknownLocale("xx_YY".into()))
        );
    }

    #[test]
    fn parses_offsets_in_minutes() {
        assert_eq!(parse_offset_minutes("-300").unwrap().local_minus_utc(), -300 * 60);
        assert_eq!(parse_offset_minutes("330").unwrap().local_minus_utc(), 330 * 60);
        assert_eq!(parse_offset_minutes("0").unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn rejects_bad_offsets() {
        assert!(parse_offset_minutes("abc").is_err());
        assert!(parse_offset_minutes("").is_err());
        // 25 hours is outside the representable range.
        assert!(parse_offset_minutes("1500").is_err());
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::UnknownLocale("xx".into()).to_string(),
            "unknown locale \"xx\""
        );
        assert_eq!(
            ConfigError::InvalidOffset("abc".into()).to_string(),
            "invalid UTC offset \"abc\" (expected minutes east of UTC)"
        );
    }
}
