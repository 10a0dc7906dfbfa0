use chrono::{DateTime, Utc};

use super::format::{DateFormatter, DateStyle};
use super::policy::DisplayMode;

/// The two strings a date display shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateLabels {
    /// Inline text: relative within a week of now, otherwise a short date.
    pub primary: String,
    /// Hover text: always the long form.
    pub tooltip: String,
}

impl DateLabels {
    fn invalid(sentinel: &str) -> Self {
        Self {
            primary: sentinel.to_string(),
            tooltip: sentinel.to_string(),
        }
    }
}

/// Map `date` to its display labels as of `now`.
///
/// Unparseable input yields the formatter's invalid-date sentinel for both labels.
pub fn date_labels<F>(formatter: &F, date: &str, now: DateTime<Utc>) -> DateLabels
where
    F: DateFormatter + ?Sized,
{
    let instant = match formatter.parse(date) {
        Ok(instant) => instant,
        Err(e) => {
            tracing::debug!(error = %e, "rendering invalid-date placeholder");
            return DateLabels::invalid(formatter.invalid_date());
        }
    };

    let primary = match DisplayMode::select(&instant, now) {
        DisplayMode::Relative => formatter.relative(&instant, now),
        DisplayMode::Absolute => formatter.format(&instant, DateStyle::Short),
    };

    DateLabels {
        primary,
        tooltip: formatter.format(&instant, DateStyle::Long),
    }
}
