use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Milliseconds in one week.
const WEEK_MS: i64 = 1000 * 3600 * 24 * 7;

/// Dates closer to now than this are phrased relatively ("3 days ago").
pub const DISPLAY_THRESHOLD: TimeDelta = TimeDelta::milliseconds(WEEK_MS);

/// Which rendering the primary label of a date uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Phrase relative to now, e.g. "3 hours ago" or "in 2 days".
    Relative,
    /// Short calendar date without time of day.
    Absolute,
}

impl DisplayMode {
    /// Classify by the absolute distance between `instant` and `now`.
    ///
    /// Past and future dates are treated alike.
    pub fn select<Tz: TimeZone>(instant: &DateTime<Tz>, now: DateTime<Utc>) -> Self {
        Self::for_elapsed(instant.clone().signed_duration_since(now))
    }

    /// Relative strictly below [`DISPLAY_THRESHOLD`], absolute at or beyond it.
    pub fn for_elapsed(elapsed: TimeDelta) -> Self {
        if elapsed.abs() < DISPLAY_THRESHOLD {
            DisplayMode::Relative
        } else {
            DisplayMode::Absolute
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 22, 12, 0, 0).unwrap()
    }

    #[test]
    fn threshold_is_one_week() {
        assert_eq!(DISPLAY_THRESHOLD, TimeDelta::days(7));
        assert_eq!(DISPLAY_THRESHOLD.num_milliseconds(), 604_800_000);
    }

    #[test]
    fn recent_past_is_relative() {
        let instant = now() - TimeDelta::hours(3);
        assert_eq!(DisplayMode::select(&instant, now()), DisplayMode::Relative);
    }

    #[test]
    fn old_past_is_absolute() {
        let instant = now() - TimeDelta::days(10);
        assert_eq!(DisplayMode::select(&instant, now()), DisplayMode::Absolute);
    }

    #[test]
    fn near_future_is_relative() {
        let instant = now() + TimeDelta::days(3);
        assert_eq!(DisplayMode::select(&instant, now()), DisplayMode::Relative);
    }

    #[test]
    fn far_future_is_absolute() {
        let instant = now() + TimeDelta::days(30);
        assert_eq!(DisplayMode::select(&instant, now()), DisplayMode::Absolute);
    }

    #[test]
    fn exact_boundary_is_absolute_both_ways() {
        assert_eq!(
            DisplayMode::select(&(now() - DISPLAY_THRESHOLD), now()),
            DisplayMode::Absolute
        );
        assert_eq!(
            DisplayMode::select(&(now() + DISPLAY_THRESHOLD), now()),
            DisplayMode::Absolute
        );
    }

    #[test]
    fn one_millisecond_inside_boundary_is_relative() {
        let instant = now() - DISPLAY_THRESHOLD + TimeDelta::milliseconds(1);
        assert_eq!(DisplayMode::select(&instant, now()), DisplayMode::Relative);
    }

    #[test]
    fn same_instant_is_relative() {
        assert_eq!(DisplayMode::for_elapsed(TimeDelta::zero()), DisplayMode::Relative);
    }

    #[test]
    fn offset_of_instant_does_not_matter() {
        let paris = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
        let instant = (now() - TimeDelta::days(7)).with_timezone(&paris);
        assert_eq!(DisplayMode::select(&instant, now()), DisplayMode::Absolute);
    }
}
