use chrono::Utc;
use dioxus::prelude::*;

use super::config::DateDisplayConfig;
use super::format::ChronoFormatter;
use super::labels::{date_labels, DateLabels};
use crate::components::tooltip::TitledTooltip;

/// Inline date that reads "3 days ago" within a week of now and "May 12, 2024"
/// beyond it, with the full date and time on hover.
///
/// Labels are recomputed against the current clock on every render. Locale and
/// display offset come from a [`DateDisplayConfig`] context when one is provided.
#[component]
pub fn DateDisplay(
    /// ISO-8601 date or date-time.
    date: String,
    /// Word rendered ahead of the date, e.g. "on".
    prefix: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let config = try_use_context::<DateDisplayConfig>().unwrap_or_default();
    let DateLabels { primary, tooltip } =
        date_labels(&ChronoFormatter::new(config), &date, Utc::now());

    let base = vec![Attribute::new("class", "date-display", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        TitledTooltip { title: tooltip,
            span {
                ..merged,
                if let Some(prefix) = &prefix {
                    "{prefix} "
                }
                time { datetime: "{date}", "{primary}" }
            }
        }
    }
}
