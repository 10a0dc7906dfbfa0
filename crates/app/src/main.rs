use dioxus::prelude::*;

mod config;
mod gallery;

use gallery::Gallery;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider(config::load);
    use_hook(|| tracing::debug!(platform = client_platform(), "app mounted"));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        main { class: "app-shell",
            h1 { "Dates" }
            Gallery {}
        }
    }
}
