use dioxus::prelude::*;
use dioxus_primitives::tooltip as prim;

pub use dioxus_primitives::{ContentAlign, ContentSide};

/// Append the themed class for one tooltip part to the caller's attributes.
fn themed(attributes: &mut Vec<Attribute>, class: &'static str) {
    attributes.push(Attribute::new("class", class, None, false));
}

/// Root of a hover/focus tooltip. Holds the open state shared by its trigger and content.
#[component]
pub fn Tooltip(mut props: prim::TooltipProps) -> Element {
    themed(&mut props.attributes, "cyber-tooltip");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tooltip { ..props }
    }
}

#[component]
pub fn TooltipTrigger(mut props: prim::TooltipTriggerProps) -> Element {
    themed(&mut props.attributes, "cyber-tooltip-trigger");

    rsx! {
        prim::TooltipTrigger { ..props }
    }
}

#[component]
pub fn TooltipContent(mut props: prim::TooltipContentProps) -> Element {
    themed(&mut props.attributes, "cyber-tooltip-content");

    rsx! {
        prim::TooltipContent { ..props }
    }
}

/// Show `title` while the pointer hovers (or focus rests on) a single child.
///
/// The child is rendered unchanged inside the trigger; the title only appears
/// in the floating content.
#[component]
pub fn TitledTooltip(
    title: String,
    #[props(default = ContentSide::Top)] side: ContentSide,
    children: Element,
) -> Element {
    rsx! {
        Tooltip {
            TooltipTrigger { {children} }
            TooltipContent { side, "{title}" }
        }
    }
}
