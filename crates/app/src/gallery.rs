use chrono::{DateTime, TimeDelta, Utc};
use dioxus::prelude::*;
use shared_ui::components::DateDisplay;

/// A labelled example date.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: &'static str,
    pub date: String,
}

/// Example dates around `now`, covering both sides of the one-week cutoff.
pub fn samples(now: DateTime<Utc>) -> Vec<Sample> {
    let around = |label, delta: TimeDelta| Sample {
        label,
        date: (now + delta).to_rfc3339(),
    };

    vec![
        around("Just now", TimeDelta::seconds(-10)),
        around("Three hours ago", TimeDelta::hours(-3)),
        around("Six days ago", TimeDelta::days(-6)),
        around("Exactly a week ago", TimeDelta::days(-7)),
        around("Ten days ago", TimeDelta::days(-10)),
        around("In two days", TimeDelta::days(2)),
        around("In a month", TimeDelta::days(30)),
        Sample {
            label: "Date only",
            date: "2019-07-04".to_string(),
        },
        Sample {
            label: "Unparseable",
            date: "not-a-date".to_string(),
        },
    ]
}

#[component]
pub fn Gallery() -> Element {
    let rows = use_hook(|| samples(Utc::now()));
    let mut draft = use_signal(|| "2024-05-12T08:30:00Z".to_string());

    rsx! {
        ul { class: "gallery",
            for sample in rows {
                li { key: "{sample.label}", class: "gallery-row",
                    span { class: "gallery-label", "{sample.label}" }
                    DateDisplay { date: sample.date.clone() }
                }
            }
        }
        label { class: "date-playground",
            "Try a date"
            input {
                r#type: "text",
                value: "{draft}",
                oninput: move |e: Event<FormData>| draft.set(e.value()),
            }
            DateDisplay { date: draft(), prefix: "on" }
        }
    }
}
